use super::*;

#[test]
fn palette_holds_six_distinct_fills() {
    for (i, a) in BAR_PALETTE.iter().enumerate() {
        for b in BAR_PALETTE.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn bar_fill_cycles_past_the_palette() {
    assert_eq!(bar_fill(0), bar_fill(BAR_PALETTE.len()));
    assert_eq!(bar_fill(2), bar_fill(BAR_PALETTE.len() + 2));
}
