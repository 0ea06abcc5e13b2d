use crate::model::PlayerId;

/// A row whose height is kept equal across the two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSlot {
    Header,
    Player(PlayerId),
}

/// One of the two side-by-side tables, seen as a stack of resizable rows.
pub trait HeightPane {
    /// Player rows in display order.
    fn player_rows(&self) -> Vec<PlayerId>;
    fn contains(&self, slot: RowSlot) -> bool;
    /// Drops any explicit height so the next measurement is content driven.
    fn clear_height(&mut self, slot: RowSlot);
    /// Rendered height in CSS pixels, `None` if the row is missing.
    fn natural_height(&self, slot: RowSlot) -> Option<f64>;
    fn set_height(&mut self, slot: RowSlot, px: f64);
}

/// Equalizes one slot across both panes. Returns the applied height.
fn equalize(
    fixed: &mut dyn HeightPane,
    scrollable: &mut dyn HeightPane,
    slot: RowSlot,
) -> Option<f64> {
    if !fixed.contains(slot) || !scrollable.contains(slot) {
        return None;
    }
    fixed.clear_height(slot);
    scrollable.clear_height(slot);

    let height = fixed
        .natural_height(slot)?
        .max(scrollable.natural_height(slot)?);

    fixed.set_height(slot, height);
    scrollable.set_height(slot, height);
    Some(height)
}

/// Sets every player row present in both panes, and the header rows, to the
/// taller of the two natural heights. Rows without a counterpart are left alone.
pub fn synchronize_row_heights(
    fixed: &mut dyn HeightPane,
    scrollable: &mut dyn HeightPane,
) -> Vec<(RowSlot, f64)> {
    let mut applied = Vec::new();
    for id in fixed.player_rows() {
        let slot = RowSlot::Player(id);
        if let Some(height) = equalize(fixed, scrollable, slot) {
            applied.push((slot, height));
        }
    }
    if let Some(height) = equalize(fixed, scrollable, RowSlot::Header) {
        applied.push((RowSlot::Header, height));
    }
    applied
}
