use super::*;

#[test]
fn pressure_label_appends_the_unit() {
    assert_eq!(pressure_label(2.1), "2.10 bar");
}

#[test]
fn temperature_label_appends_the_unit() {
    assert_eq!(temperature_label(55.0), "55.00 \u{b0}C");
}
