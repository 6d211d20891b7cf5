use std::collections::{BTreeMap, HashSet};

use coachdesk_core::{AppError, AppResult};

use super::{MoveDirection, Slide};
use crate::record::RecordId;

/// Sorts slides into display sequence: by `order`, ties broken by id.
pub fn sort_for_display(slides: &mut [Slide]) {
    slides.sort_by(|left, right| {
        left.order
            .cmp(&right.order)
            .then_with(|| left.id.cmp(&right.id))
    });
}

/// Returns order values shared by more than one active slide.
#[must_use]
pub fn find_order_collisions(slides: &[Slide]) -> Vec<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for slide in slides.iter().filter(|slide| slide.is_active) {
        *counts.entry(slide.order).or_default() += 1;
    }

    counts
        .into_iter()
        .filter_map(|(order, count)| (count > 1).then_some(order))
        .collect()
}

/// Computes the full id sequence after moving one slide a step.
///
/// Returns `None` when the slide is already first (moving up) or last
/// (moving down).
pub fn reordered_ids(
    slides: &[Slide],
    slide_id: &RecordId,
    direction: MoveDirection,
) -> AppResult<Option<Vec<RecordId>>> {
    let mut ordered = slides.to_vec();
    sort_for_display(&mut ordered);

    let mut ids = ordered
        .iter()
        .map(|slide| slide.require_id().cloned())
        .collect::<AppResult<Vec<_>>>()?;

    let index = ids
        .iter()
        .position(|id| id == slide_id)
        .ok_or_else(|| AppError::NotFound(format!("slide '{slide_id}' does not exist")))?;

    let target = match direction {
        MoveDirection::Up if index > 0 => index - 1,
        MoveDirection::Down if index + 1 < ids.len() => index + 1,
        _ => return Ok(None),
    };

    ids.swap(index, target);
    Ok(Some(ids))
}

/// Validates that `requested` is a permutation of the current slide ids.
pub fn validate_ordering(slides: &[Slide], requested: &[RecordId]) -> AppResult<()> {
    let current = slides
        .iter()
        .map(|slide| slide.require_id().cloned())
        .collect::<AppResult<HashSet<_>>>()?;

    let mut seen = HashSet::new();
    for id in requested {
        if !seen.insert(id) {
            return Err(AppError::Validation(format!(
                "slide '{id}' appears more than once in the ordering"
            )));
        }
        if !current.contains(id) {
            return Err(AppError::NotFound(format!("slide '{id}' does not exist")));
        }
    }

    if seen.len() != current.len() {
        return Err(AppError::Validation(format!(
            "ordering must list all {} slides, got {}",
            current.len(),
            seen.len()
        )));
    }

    Ok(())
}

/// Assigns orders `1..=n` following `ordered_ids`. Unlisted slides keep their order.
pub fn apply_ordering(slides: &mut [Slide], ordered_ids: &[RecordId]) {
    for (position, id) in ordered_ids.iter().enumerate() {
        if let Some(slide) = slides
            .iter_mut()
            .find(|slide| slide.id.as_ref() == Some(id))
        {
            slide.order = u32::try_from(position + 1).unwrap_or(u32::MAX);
        }
    }
}
