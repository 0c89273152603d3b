//! End-to-end generation tests.
//!
//! These drive whole schema documents through the generator and check the
//! resulting class model and emitted Java source, including reference
//! resolution across documents and into fragments.

use pojo_rs::model::AnnotationParam;
use pojo_rs::{GenerationConfig, Generator, InMemoryReader, JavaEmitter, JavaType};
use serde_json::json;
use url::Url;

fn config() -> GenerationConfig {
    GenerationConfig::default().with_target_package("com.example")
}

fn generator(reader: InMemoryReader) -> Generator {
    Generator::with_reader(config(), Box::new(reader))
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

// =============================================================================
// Class model construction
// =============================================================================

#[test]
fn nested_objects_generate_nested_classes() {
    let reader = InMemoryReader::new().with_document(
        "http://example.com/order.json",
        json!({
            "type": "object",
            "properties": {
                "customer": {
                    "type": "object",
                    "properties": { "name": { "type": "string" } }
                }
            }
        }),
    );
    let mut generator = generator(reader);

    let root = generator
        .generate("order", &url("http://example.com/order.json"))
        .unwrap();

    let model = generator.model();
    assert_eq!(model.len(), 2);
    let order = model.lookup("com.example.Order").unwrap();
    let customer = model.lookup("com.example.Customer").unwrap();
    assert_eq!(root, JavaType::Class(order));
    assert_eq!(
        model.class(order).field("customer").unwrap().java_type(),
        &JavaType::Class(customer)
    );
    assert!(model.class(customer).has_field("name"));
}

#[test]
fn refs_to_one_document_share_one_class() {
    let reader = InMemoryReader::new()
        .with_document(
            "http://example.com/order.json",
            json!({
                "type": "object",
                "properties": {
                    "billing": { "$ref": "address.json" },
                    "shipping": { "$ref": "address.json" }
                }
            }),
        )
        .with_document(
            "http://example.com/address.json",
            json!({
                "type": "object",
                "properties": { "street": { "type": "string" } }
            }),
        );
    let mut generator = generator(reader);

    generator
        .generate("order", &url("http://example.com/order.json"))
        .unwrap();

    let model = generator.model();
    assert_eq!(model.len(), 2);
    let order = model.lookup("com.example.Order").unwrap();
    let billing = model.class(order).field("billing").unwrap().java_type();
    let shipping = model.class(order).field("shipping").unwrap().java_type();
    // the referenced document is named after the first property that reached it
    assert_eq!(billing, &JavaType::Class(model.lookup("com.example.Billing").unwrap()));
    assert_eq!(billing, shipping);
}

#[test]
fn self_reference_terminates_on_the_class_under_construction() {
    let reader = InMemoryReader::new().with_document(
        "http://example.com/node.json",
        json!({
            "type": "object",
            "properties": {
                "value": { "type": "string" },
                "next": { "$ref": "#" }
            }
        }),
    );
    let mut generator = generator(reader);

    let root = generator
        .generate("node", &url("http://example.com/node.json"))
        .unwrap();

    let model = generator.model();
    assert_eq!(model.len(), 1);
    let id = model.lookup("com.example.Node").unwrap();
    assert_eq!(root, JavaType::Class(id));
    assert_eq!(
        model.class(id).field("next").unwrap().java_type(),
        &JavaType::Class(id)
    );
}

#[test]
fn fragment_refs_resolve_into_definitions() {
    let reader = InMemoryReader::new().with_document(
        "http://example.com/person.json",
        json!({
            "type": "object",
            "properties": { "home": { "$ref": "#/definitions/address" } },
            "definitions": {
                "address": {
                    "type": "object",
                    "properties": { "street": { "type": "string" } }
                }
            }
        }),
    );
    let mut generator = generator(reader);

    generator
        .generate("person", &url("http://example.com/person.json"))
        .unwrap();

    let model = generator.model();
    let person = model.lookup("com.example.Person").unwrap();
    let home = model.lookup("com.example.Home").unwrap();
    assert_eq!(
        model.class(person).field("home").unwrap().java_type(),
        &JavaType::Class(home)
    );
    assert!(model.class(home).has_field("street"));
}

#[test]
fn declared_property_order_is_preserved() {
    let reader = InMemoryReader::new().with_document(
        "http://example.com/animals.json",
        json!({
            "type": "object",
            "properties": {
                "zebra": { "type": "string" },
                "apple": { "type": "string" },
                "mango": { "type": "string" }
            }
        }),
    );
    let config = GenerationConfig {
        include_additional_properties: false,
        ..config()
    };
    let mut generator = Generator::with_reader(config, Box::new(reader));

    generator
        .generate("animals", &url("http://example.com/animals.json"))
        .unwrap();

    let model = generator.model();
    let id = model.lookup("com.example.Animals").unwrap();
    let names: Vec<&str> = model.class(id).fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["zebra", "apple", "mango"]);

    let order = model
        .class(id)
        .annotations()
        .iter()
        .find(|a| a.class_name() == "com.fasterxml.jackson.annotation.JsonPropertyOrder")
        .unwrap();
    assert_eq!(
        order.param("value"),
        Some(&AnnotationParam::StrArray(vec![
            "zebra".to_string(),
            "apple".to_string(),
            "mango".to_string(),
        ]))
    );
}

// =============================================================================
// Filesystem resolution
// =============================================================================

#[test]
fn relative_refs_resolve_between_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("address.json"),
        json!({
            "type": "object",
            "properties": { "street": { "type": "string" } }
        })
        .to_string(),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("person.json"),
        json!({
            "type": "object",
            "properties": { "address": { "$ref": "address.json" } }
        })
        .to_string(),
    )
    .unwrap();

    let mut generator = Generator::new(config());
    let source = pojo_rs::url_for_path(&dir.path().join("person.json")).unwrap();

    generator.generate("person", &source).unwrap();

    let model = generator.model();
    assert!(model.lookup("com.example.Person").is_some());
    let address = model.lookup("com.example.Address").unwrap();
    assert!(model.class(address).has_field("street"));
}

// =============================================================================
// Emitted source
// =============================================================================

fn emit_single(config: GenerationConfig, name: &str, document: serde_json::Value) -> String {
    let source = "http://example.com/schema.json";
    let reader = InMemoryReader::new().with_document(source, document);
    let mut generator = Generator::with_reader(config.clone(), Box::new(reader));
    let root = generator.generate(name, &url(source)).unwrap();
    let JavaType::Class(id) = root else {
        panic!("expected the document to produce a class");
    };
    JavaEmitter::new(generator.model(), &config).emit(id)
}

#[test]
fn emitted_class_matches_expected_shape() {
    let config = GenerationConfig {
        include_additional_properties: false,
        ..config()
    };
    let code = emit_single(
        config,
        "person",
        json!({
            "type": "object",
            "properties": { "name": { "type": "string" } }
        }),
    );

    insta::assert_snapshot!(code, @r###"
package com.example;

@com.fasterxml.jackson.annotation.JsonInclude(com.fasterxml.jackson.annotation.JsonInclude.Include.NON_NULL)
@com.fasterxml.jackson.annotation.JsonPropertyOrder({
    "name"
})
public class Person {

    @com.fasterxml.jackson.annotation.JsonProperty("name")
    private java.lang.String name;

    public java.lang.String getName() {
        return name;
    }

    public void setName(java.lang.String name) {
        this.name = name;
    }

}
"###);
}

#[test]
fn constraint_keywords_reach_the_emitted_source() {
    let config = GenerationConfig {
        include_jsr303_annotations: true,
        ..config()
    };
    let code = emit_single(
        config,
        "person",
        json!({
            "type": "object",
            "properties": {
                "age": { "type": "integer", "minimum": 0, "maximum": 150 },
                "name": { "type": "string", "minLength": 1, "maxLength": 50 }
            }
        }),
    );

    assert!(code.contains("@javax.validation.constraints.DecimalMin(\"0\")"));
    assert!(code.contains("@javax.validation.constraints.DecimalMax(\"150\")"));
    assert!(code.contains("@javax.validation.constraints.Size(min = 1, max = 50)"));
    assert!(code.contains("private java.lang.Integer age;"));
}

#[test]
fn jakarta_namespace_reaches_the_emitted_source() {
    let config = GenerationConfig {
        include_jsr303_annotations: true,
        use_jakarta_validation: true,
        ..config()
    };
    let code = emit_single(
        config,
        "person",
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "minLength": 1 }
            }
        }),
    );

    assert!(code.contains("@jakarta.validation.constraints.Size(min = 1)"));
    assert!(!code.contains("javax.validation"));
}

#[test]
fn description_keyword_reaches_the_emitted_source() {
    let code = emit_single(
        config(),
        "person",
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "The name." }
            }
        }),
    );

    assert!(code.contains("@com.fasterxml.jackson.annotation.JsonPropertyDescription(\"The name.\")"));
}

#[test]
fn additional_properties_wiring_reaches_the_emitted_source() {
    let code = emit_single(
        config(),
        "thing",
        json!({
            "type": "object",
            "properties": { "name": { "type": "string" } }
        }),
    );

    // the ignored map only round-trips through the any-getter/any-setter pair
    assert!(code.contains("@com.fasterxml.jackson.annotation.JsonIgnore"));
    assert!(code.contains("@com.fasterxml.jackson.annotation.JsonAnyGetter"));
    assert!(code
        .contains("public java.util.Map<java.lang.String, java.lang.Object> getAdditionalProperties() {"));
    assert!(code.contains("@com.fasterxml.jackson.annotation.JsonAnySetter"));
    assert!(code.contains("public void setAdditionalProperty(java.lang.String name, java.lang.Object value) {"));
}

#[test]
fn gson_style_emits_serialized_name() {
    let config = GenerationConfig {
        annotation_style: pojo_rs::AnnotationStyle::Gson,
        ..config()
    };
    let code = emit_single(
        config,
        "person",
        json!({
            "type": "object",
            "properties": { "first_name": { "type": "string" } }
        }),
    );

    assert!(code.contains("@com.google.gson.annotations.SerializedName(\"first_name\")"));
    assert!(code.contains("@com.google.gson.annotations.Expose"));
    assert!(code.contains("private java.lang.String firstName;"));
    assert!(!code.contains("com.fasterxml.jackson"));
}

#[test]
fn dynamic_accessors_reach_the_emitted_source() {
    let config = GenerationConfig {
        include_dynamic_accessors: true,
        ..config()
    };
    let code = emit_single(
        config,
        "thing",
        json!({
            "type": "object",
            "properties": { "name": { "type": "string" } }
        }),
    );

    assert!(code.contains(
        "protected static final java.lang.Object NOT_FOUND_VALUE = new java.lang.Object();"
    ));
    assert!(code.contains("case \"name\":"));
    assert!(code.contains("public Thing with(java.lang.String name, java.lang.Object value) {"));
    assert!(code.contains("additionalProperties.put(name, ((java.lang.Object) value));"));
}
