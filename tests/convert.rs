use approx::assert_relative_eq;
use ndarray::{array, Array1, Array2};
use color_stack::{convert, convert_to, quantile, ConvertError,
                  ConvertOptions, Converted, NumericType};

#[test]
fn same_range_is_identity() {
    let img = array![0u8, 128, 255];
    let out: Array1<u8> = convert(&img, &ConvertOptions::default()).unwrap();
    assert_eq!(out, array![0, 128, 255]);
}

#[test]
fn stretches_to_new_range() {
    let img = array![10u8, 20, 30];
    let opts = ConvertOptions::new().new_minimum(0.).new_maximum(100.);
    let out: Array1<u8> = convert(&img, &opts).unwrap();
    assert_eq!(out, array![0, 50, 100]);
    // The input is not modified.
    assert_eq!(img, array![10, 20, 30]);
}

#[test]
fn widens_to_sixteen_bits() {
    let img = array![[0u8, 51], [102, 255]];
    let out: Array2<u16> = convert(&img, &ConvertOptions::new()).unwrap();
    assert_eq!(out, array![[0, 13107], [26214, 65535]]);
}

#[test]
fn quantiles_clip_the_tails() {
    let img: Array1<u8> = (0 ..= 100).collect();
    let lo = quantile(&img, 0.1).unwrap();
    let hi = quantile(&img, 0.9).unwrap();
    assert_relative_eq!(lo, 10.);
    assert_relative_eq!(hi, 90.);
    let opts = ConvertOptions::new().min_quantile(0.1).max_quantile(0.9);
    let out: Array1<u8> = convert(&img, &opts).unwrap();
    for (&x, &y) in img.iter().zip(&out) {
        if f64::from(x) <= lo { assert_eq!(y, 0, "x = {x}") }
        else if f64::from(x) >= hi { assert_eq!(y, 255, "x = {x}") }
        else { assert!(0 < y && y < 255, "x = {x} ↦ {y}") }
    }
    assert_eq!(out[50], 127);
}

#[test]
fn quantile_with_explicit_range() {
    let img = array![1u16, 2, 3, 4, 1000];
    let opts = ConvertOptions::new().new_maximum(30.).max_quantile(0.75);
    let out: Array1<u8> = convert(&img, &opts).unwrap();
    assert_eq!(out, array![0, 10, 20, 30, 30]);
}

#[test]
fn boolean_masks() {
    let mask = array![[true, false], [false, true]];
    let out: Array2<u8> = convert(&mask, &ConvertOptions::new()).unwrap();
    assert_eq!(out, array![[255, 0], [0, 255]]);
    let out: Array2<i16> = convert(&mask, &ConvertOptions::new()).unwrap();
    assert_eq!(out, array![[32767, -32768], [-32768, 32767]]);
}

#[test]
fn constant_image_fails() {
    let img = Array2::from_elem((3, 3), 42u16);
    let r: Result<Array2<u8>, _> = convert(&img, &ConvertOptions::new());
    assert_eq!(r, Err(ConvertError::DegenerateRange { value: 42. }));
    let mask = Array2::from_elem((2, 2), true);
    let r = convert_to(&mask, NumericType::U8, &ConvertOptions::new());
    assert!(matches!(r, Err(ConvertError::DegenerateRange { .. })));
}

#[test]
fn runtime_target_from_name() {
    let t: NumericType = "uint16".parse().unwrap();
    let out = convert_to(&array![-1.0f32, 1.0], t, &ConvertOptions::new())
        .unwrap();
    assert_eq!(out, Converted::U16(array![0, 65535]));
}

#[test]
fn options_from_json() {
    let opts: ConvertOptions =
        serde_json::from_str(r#"{"new_maximum": 4095, "max_quantile": 0.99}"#)
        .unwrap();
    assert_eq!(opts, ConvertOptions::new().new_maximum(4095.).max_quantile(0.99));
    let json = serde_json::to_string(&NumericType::I32).unwrap();
    assert_eq!(json, r#""int32""#);
    assert!(serde_json::from_str::<ConvertOptions>(r#"{"minimum": 1}"#).is_err());
}
