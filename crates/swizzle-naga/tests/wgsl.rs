//! Scanning real WGSL modules for swizzles.

use rstest::rstest;
use swizzle_core::{Swizzle, SwizzleError};
use swizzle_naga::{check_wgsl, scan_wgsl, to_naga, SwizzleUse};

const SHADER: &str = r#"
fn pick(v: vec4<f32>) -> vec2<f32> {
    return v.zx;
}

@fragment
fn main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
    let bgr = color.zyx;
    return vec4<f32>(bgr.xxy, 1.0);
}
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn swizzle_use(function: &str, selector: &str, source_size: usize) -> SwizzleUse {
    SwizzleUse {
        function: function.to_string(),
        swizzle: Swizzle::parse(selector).unwrap(),
        source_size: Some(source_size),
    }
}

#[test]
fn test_scan_finds_all_swizzles() {
    init_tracing();
    let uses = scan_wgsl(SHADER).unwrap();

    assert_eq!(uses.len(), 3);
    assert!(uses.contains(&swizzle_use("pick", "zx", 4)));
    assert!(uses.contains(&swizzle_use("main", "zyx", 3)));
    assert!(uses.contains(&swizzle_use("main", "xxy", 3)));
}

#[test]
fn test_functions_before_entry_points() {
    let uses = scan_wgsl(SHADER).unwrap();
    assert_eq!(uses[0].function, "pick");
}

#[test]
fn test_check_accepts_valid_module() {
    let uses = check_wgsl(SHADER).unwrap();
    for u in &uses {
        let size = u.source_size.unwrap();
        assert!(u.swizzle.required_size() <= size);
    }
}

#[test]
fn test_single_component_is_not_a_swizzle() {
    let uses = scan_wgsl(
        r#"
fn first(v: vec4<f32>) -> f32 {
    return v.x;
}
"#,
    )
    .unwrap();
    assert!(uses.is_empty());
}

#[rstest]
#[case::syntax_error("fn broken( -> {")]
#[case::component_out_of_range("fn f(v: vec2<f32>) -> vec2<f32> { return v.zx; }")]
fn test_scan_rejects_bad_source(#[case] source: &str) {
    init_tracing();
    assert!(scan_wgsl(source).is_err());
}

#[test]
fn test_check_reports_source_too_small() {
    init_tracing();
    let err = check_wgsl("fn f(v: vec2<f32>) -> vec2<f32> { return v.zx; }").unwrap_err();

    assert_eq!(
        err.root_cause().downcast_ref::<SwizzleError>(),
        Some(&SwizzleError::SourceTooSmall {
            swizzle: "zx".to_string(),
            required: 3,
            available: 2,
        })
    );
    assert!(format!("{err:#}").contains("in function `f`"));
}

#[test]
fn test_validation_error_keeps_detail() {
    let err = scan_wgsl("fn f(v: vec2<f32>) -> vec2<f32> { return v.zx; }").unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("WGSL validation failed"));
    assert!(message.contains("'f'"), "{message}");
}

#[test]
fn test_scanned_swizzles_round_trip_through_naga() {
    for u in scan_wgsl(SHADER).unwrap() {
        let (size, pattern) = to_naga(u.swizzle).unwrap();
        assert_eq!(swizzle_naga::from_naga(size, pattern), u.swizzle);
    }
}
