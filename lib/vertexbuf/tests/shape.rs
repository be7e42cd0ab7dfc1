//! Attribute bookkeeping on [VertexShape].

use vertexbuf::{
    AttributeComponent, AttributeData, AttributeName, AttributeType, Error, Topology,
    VertexCountMismatch, VertexShape,
};

fn triangle() -> VertexShape {
    let mut shape = VertexShape::new(Topology::Triangles, 3);
    assert!(shape
        .add_vertex_attribute(
            AttributeName::Position,
            AttributeType::Vec3,
            vec![0.0f32, 1.0, 0.0, -1.0, -1.0, 0.0, 1.0, -1.0, 0.0],
        )
        .is_none());
    assert!(shape
        .add_vertex_attribute(
            AttributeName::COLOR,
            AttributeType::Vec3,
            vec![1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        )
        .is_none());
    shape
}

#[test]
fn consistent_shape_has_no_diagnostics() {
    let shape = triangle();
    assert!(shape.is_consistent());
    assert!(shape.diagnostics().is_empty());
    assert_eq!(shape.attributes().len(), 2);
    assert_eq!(shape[&AttributeName::Position].vertex_count(), 3);
}

#[test]
fn mismatch_is_stored_and_reported() {
    let mut shape = VertexShape::new(Topology::Triangles, 3);
    let data = vec![0.0f32; 12];
    let warning = shape.add_vertex_attribute(AttributeName::Position, AttributeType::Vec3, data.clone());
    let expected = VertexCountMismatch {
        attribute: AttributeName::Position,
        expected: 3,
        found: 4,
        trailing: 0,
    };
    assert_eq!(warning, Some(expected.clone()));
    assert_eq!(shape.diagnostics(), &[expected]);
    assert_eq!(shape.attribute_f32(&AttributeName::Position), Some(data.as_slice()));
    assert!(!shape.is_consistent());
}

#[test]
fn ragged_payload_is_a_mismatch() {
    let mut shape = VertexShape::new(Topology::Points, 2);
    let warning = shape
        .add_vertex_attribute(AttributeName::Position, AttributeType::Vec3, vec![0.0f32; 7])
        .expect("7 elements is not 2 whole vec3s");
    assert_eq!(warning.found, 2);
    assert_eq!(warning.trailing, 1);
    assert_eq!(
        warning.to_string(),
        "wrong number of vertices (2 instead of 2, 1 trailing elements) for attribute POSITION"
    );
}

#[test]
fn replacing_keeps_insertion_order() {
    let mut shape = triangle();
    shape.add_vertex_attribute(AttributeName::Position, AttributeType::Vec3, vec![2.0f32; 9]);
    let names: Vec<_> = shape.attributes().map(|a| a.name().clone()).collect();
    assert_eq!(names, vec![AttributeName::Position, AttributeName::COLOR]);
    assert_eq!(shape.attribute_f32(&AttributeName::Position), Some(&[2.0f32; 9][..]));
}

#[test]
fn custom_attributes() {
    let mut shape = triangle();
    shape.add_vertex_attribute("vertexShininess".into(), AttributeType::Scalar, vec![1u8, 2, 3]);
    let attr = &shape[&AttributeName::Custom("vertexShininess".to_owned())];
    assert_eq!(attr.data().as_slice::<u8>(), Some(&[1u8, 2, 3][..]));
    assert_eq!(attr.stride(), 1);
    assert!(shape.is_consistent());
}

#[test]
fn strict_insertion_rejects_mismatch() {
    let mut shape = triangle();
    let err = shape
        .try_add_vertex_attribute(AttributeName::Normal, AttributeType::Vec3, vec![0.0f32; 6])
        .unwrap_err();
    assert!(matches!(err, Error::VertexCountMismatch(m) if m.found == 2));
    assert!(shape.attribute(&AttributeName::Normal).is_none());
    assert!(shape.diagnostics().is_empty());

    shape
        .try_add_vertex_attribute(AttributeName::Normal, AttributeType::Vec3, vec![0.0f32; 9])
        .unwrap();
    assert_eq!(shape.attributes().len(), 3);
}

#[test]
fn gl_round_trip() {
    for val in 0..=6 {
        assert_eq!(Topology::from_gl(val).unwrap().to_gl(), val);
    }
    assert_eq!(Topology::from_gl(7), Err(Error::UnknownTopology(7)));
    assert_eq!(Topology::TriangleFan.primitive_count(9), 7);
    assert_eq!(Topology::Triangles.primitive_count(36), 12);
}

#[test]
fn component_gl_round_trip() {
    use AttributeComponent as C;
    for (comp, val) in [
        (C::I8, 5120),
        (C::U8, 5121),
        (C::I16, 5122),
        (C::U16, 5123),
        (C::U32, 5125),
        (C::F32, 5126),
    ] {
        assert_eq!(comp.to_gl(), val);
        assert_eq!(AttributeComponent::from_gl(val), Ok(comp));
    }
    // GL_INT has no component here
    assert_eq!(AttributeComponent::from_gl(5124), Err(Error::UnknownComponent(5124)));
    assert_eq!(Error::UnknownComponent(5124).to_string(), "invalid component type value: 5124");
}

#[test]
fn payload_lengths() {
    let empty = AttributeData::from(Vec::<u16>::new());
    assert!(empty.is_empty());
    assert_eq!(empty.component(), AttributeComponent::U16);
    let data = AttributeData::from([1i16, 2, 3]);
    assert!(!data.is_empty());
    assert_eq!(data.len(), 3);
    assert_eq!(data.size_bytes(), 6);
}

#[test]
fn shader_input_names_map_back_to_variants() {
    assert_eq!(AttributeName::from("vertexPosition"), AttributeName::Position);
    assert_eq!(AttributeName::from("vertexNormal"), AttributeName::Normal);
    assert_eq!(AttributeName::from("vertexColor"), AttributeName::COLOR);
    assert_eq!(AttributeName::from("vertexColor2".to_owned()), AttributeName::Color(2));
    assert_eq!(AttributeName::from("vertexTexcoord10"), AttributeName::Texcoord(10));
    for custom in ["vertexColor0", "vertexColor+1", "vertexColorful", "vertexWeights01", "Position"] {
        assert_eq!(AttributeName::from(custom), AttributeName::Custom(custom.to_owned()));
    }
}

#[test]
fn string_names_replace_their_variant() {
    let mut shape = triangle();
    shape.add_vertex_attribute("vertexPosition".into(), AttributeType::Vec3, vec![3.0f32; 9]);
    assert_eq!(shape.attributes().len(), 2);
    assert_eq!(shape.attribute_f32(&AttributeName::Position), Some(&[3.0f32; 9][..]));
}

#[quickcheck_macros::quickcheck]
fn shader_inputs_round_trip(set: u32, kind: u8) -> bool {
    let name = match kind % 7 {
        0 => AttributeName::Position,
        1 => AttributeName::Normal,
        2 => AttributeName::Tangent,
        3 => AttributeName::Texcoord(set),
        4 => AttributeName::Color(set),
        5 => AttributeName::Joints(set),
        _ => AttributeName::Weights(set),
    };
    AttributeName::from(name.shader_input()) == name
}

#[test]
fn shader_inputs() {
    assert_eq!(AttributeName::Position.shader_input(), "vertexPosition");
    assert_eq!(AttributeName::COLOR.shader_input(), "vertexColor");
    assert_eq!(AttributeName::Color(1).shader_input(), "vertexColor1");
    assert_eq!(AttributeName::from("uv").shader_input(), "uv");
}

#[quickcheck_macros::quickcheck]
fn warns_iff_payload_is_not_exactly_the_vertex_count(len: u8, expected: u8) -> bool {
    let mut shape = VertexShape::new(Topology::Points, expected as usize);
    let warning = shape.add_vertex_attribute(
        AttributeName::Position,
        AttributeType::Vec3,
        vec![0.0f32; len as usize],
    );
    let consistent = len as usize == expected as usize * 3;
    warning.is_none() == consistent
        && shape.attributes().len() == 1
        && shape.attribute_f32(&AttributeName::Position).map(<[f32]>::len) == Some(len as usize)
}
