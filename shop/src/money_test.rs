use super::*;

fn line(price: f64, quantity: u32) -> BasketLine {
    BasketLine {
        id: "x".to_owned(),
        name: "X".to_owned(),
        price,
        quantity,
    }
}

#[test]
fn format_price_pads_two_decimals() {
    assert_eq!(format_price(22.0), "£22.00");
    assert_eq!(format_price(8.5), "£8.50");
    assert_eq!(format_price(0.0), "£0.00");
}

#[test]
fn format_price_rounds_to_pence() {
    assert_eq!(format_price(0.1 + 0.2), "£0.30");
    assert_eq!(format_price(3.456), "£3.46");
}

#[test]
fn basket_total_of_empty_formats_as_positive_zero() {
    let total = basket_total(&[]);
    assert!(total.is_sign_positive());
    assert_eq!(format_price(total), "£0.00");
}

#[test]
fn format_price_never_prints_negative_zero() {
    assert_eq!(format_price(-0.0), "£0.00");
    assert_eq!(format_price(-0.001), "£0.00");
    assert!(round_pence(-0.004).is_sign_positive());
}

#[test]
fn basket_total_multiplies_quantity() {
    let total = basket_total(&[line(8.5, 2), line(5.0, 1)]);
    assert!((total - 22.0).abs() < f64::EPSILON);
}

#[test]
fn basket_total_rounds_accumulated_error() {
    let total = basket_total(&[line(0.1, 3)]);
    assert!((total - 0.3).abs() < f64::EPSILON);
}
