use ignite_shop::utils::format_brl;

#[test]
fn test_format_brl_basic() {
    assert_eq!(format_brl(Some(7990)), "R$\u{a0}79,90");
}

#[test]
fn test_format_brl_pads_cents() {
    assert_eq!(format_brl(Some(5)), "R$\u{a0}0,05");
    assert_eq!(format_brl(Some(100)), "R$\u{a0}1,00");
}

#[test]
fn test_format_brl_groups_thousands() {
    assert_eq!(format_brl(Some(123456)), "R$\u{a0}1.234,56");
    assert_eq!(format_brl(Some(100000000)), "R$\u{a0}1.000.000,00");
    assert_eq!(format_brl(Some(99999)), "R$\u{a0}999,99");
}

#[test]
fn test_format_brl_missing_amount_is_zero() {
    assert_eq!(format_brl(None), "R$\u{a0}0,00");
}

#[test]
fn test_format_brl_negative() {
    assert_eq!(format_brl(Some(-1050)), "-R$\u{a0}10,50");
}
