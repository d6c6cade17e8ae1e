//! Shader Tests - WGSL Parse and Validation
//!
//! Catches shader errors at test time instead of first launch.

#[test]
fn test_castle_shader_parses_and_validates() {
    let source = include_str!("../../shaders/castle.wgsl");
    let module = naga::front::wgsl::parse_str(source).expect("WGSL parse error");

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator.validate(&module).expect("WGSL validation error");

    // Both entry points the pipeline binds must exist.
    let names: Vec<_> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
