use super::*;

#[test]
fn boundaries_switch_at_noon_and_six() {
    assert!(for_hour(0).contains("morning"));
    assert!(for_hour(11).contains("morning"));
    assert!(for_hour(12).contains("afternoon"));
    assert!(for_hour(17).contains("afternoon"));
    assert!(for_hour(18).contains("evening"));
    assert!(for_hour(23).contains("evening"));
}
