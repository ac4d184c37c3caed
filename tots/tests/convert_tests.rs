//! Integration tests for the converter.
//!
//! Type graphs are described by hand here so every descriptor shape can be
//! exercised without the derive macro.

use tots::{
    ConvertError, Converter, ConverterConfig, FieldDescriptor, Kind, StructSpec, TypeDescriptor,
    TypeOptions, BANNER,
};

fn string() -> TypeDescriptor {
    TypeDescriptor::scalar(Kind::String)
}

fn number() -> TypeDescriptor {
    TypeDescriptor::scalar(Kind::U32)
}

fn document(blocks: &[&str]) -> String {
    let mut sections = vec![BANNER];
    sections.extend_from_slice(blocks);
    format!("{}\n", sections.join("\n\n"))
}

// =============================================================================
// Fixtures
// =============================================================================

fn page_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("Page", number()).with_json_tag("page"),
        FieldDescriptor::new("Keyword", string())
            .with_json_tag("keyword")
            .with_ts_doc("search keyword"),
        FieldDescriptor::new("Size", number()).with_json_tag("size,omitempty"),
        FieldDescriptor::new("secret", string()).with_exported(false),
        FieldDescriptor::new("Internal", string()).with_json_tag("-"),
    ]
}

fn page_parameter() -> TypeDescriptor {
    TypeDescriptor::structure("api::PageParameter", "PageParameter", page_fields)
}

fn item_fields() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::new("Name", string()).with_json_tag("name")]
}

fn item() -> TypeDescriptor {
    TypeDescriptor::structure("shop::Item", "Item", item_fields)
}

fn catalog_fields() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::new(
        "Items",
        TypeDescriptor::map(string(), TypeDescriptor::pointer(item())),
    )
    .with_json_tag("items")]
}

fn catalog() -> TypeDescriptor {
    TypeDescriptor::structure("shop::Catalog", "Catalog", catalog_fields)
}

fn base_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("ID", TypeDescriptor::scalar(Kind::U64)).with_json_tag("id"),
        FieldDescriptor::new("Created", TypeDescriptor::scalar(Kind::I64))
            .with_json_tag("created"),
    ]
}

fn base() -> TypeDescriptor {
    TypeDescriptor::structure("app::Base", "Base", base_fields)
}

fn user_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("Name", string()).with_json_tag("name"),
        FieldDescriptor::new("Base", TypeDescriptor::pointer(base())).embedded(),
        FieldDescriptor::new("Email", string()).with_json_tag("email"),
    ]
}

fn user() -> TypeDescriptor {
    TypeDescriptor::structure("app::User", "User", user_fields)
}

fn author_fields() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::new(
        "Posts",
        TypeDescriptor::array(TypeDescriptor::pointer(post())),
    )
    .with_json_tag("posts")]
}

fn author() -> TypeDescriptor {
    TypeDescriptor::structure("blog::Author", "Author", author_fields)
}

fn post_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("Author", TypeDescriptor::pointer(author())).with_json_tag("author"),
        FieldDescriptor::new("Title", string()).with_json_tag("title"),
    ]
}

fn post() -> TypeDescriptor {
    TypeDescriptor::structure("blog::Post", "Post", post_fields)
}

fn timestamp() -> TypeDescriptor {
    TypeDescriptor::named("app::Timestamp", TypeDescriptor::scalar(Kind::I64))
}

fn event_fields() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::new("When", timestamp())
        .with_json_tag("when")
        .with_ts_type("X")]
}

fn event() -> TypeDescriptor {
    TypeDescriptor::structure("app::Event", "Event", event_fields)
}

fn log_fields() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::new("At", TypeDescriptor::pointer(timestamp())).with_json_tag("at")]
}

fn log() -> TypeDescriptor {
    TypeDescriptor::structure("app::Log", "Log", log_fields)
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_page_parameter() {
    let out = Converter::new().add_type(page_parameter()).convert().unwrap();
    assert_eq!(
        out,
        document(&["export interface PageParameter {\n    page: number;\n    /**\n     *\n     * search keyword\n     */\n    keyword: string;\n    size?: number;\n}"])
    );
}

#[test]
fn test_skip_rule() {
    let out = Converter::new().add_type(page_parameter()).convert().unwrap();
    assert!(!out.contains("secret"));
    assert!(!out.contains("Internal"));
    assert!(!out.contains("-:"));
}

#[test]
fn test_empty_tag_name_skips_field() {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("Name", string()).with_json_tag("name"),
            FieldDescriptor::new("Count", TypeDescriptor::scalar(Kind::U8))
                .with_json_tag(",omitempty"),
        ]
    }
    let counter = TypeDescriptor::structure("t::Counter", "Counter", fields);
    let out = Converter::new().add_type(counter).convert().unwrap();
    assert_eq!(
        out,
        document(&["export interface Counter {\n    name: string;\n}"])
    );
}

#[test]
fn test_map_field_with_prefix_and_suffix() {
    let out = Converter::new()
        .with_prefix("I")
        .with_suffix("Dto")
        .add_type(catalog())
        .convert()
        .unwrap();
    assert_eq!(
        out,
        document(&[
            "export interface IItemDto {\n    name: string;\n}",
            "export interface ICatalogDto {\n    items: {[key: string]: IItemDto};\n}",
        ])
    );
}

#[test]
fn test_no_export_and_custom_indent() {
    let out = Converter::new()
        .with_export(false)
        .with_indent("\t")
        .add_type(item())
        .convert()
        .unwrap();
    assert_eq!(out, document(&["interface Item {\n\tname: string;\n}"]));
}

#[test]
fn test_nested_collections() {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(
                "Scores",
                TypeDescriptor::map(
                    string(),
                    TypeDescriptor::map(string(), TypeDescriptor::array(number())),
                ),
            )
            .with_json_tag("scores"),
            FieldDescriptor::new(
                "Grid",
                TypeDescriptor::array(TypeDescriptor::pointer(TypeDescriptor::array(item()))),
            )
            .with_json_tag("grid"),
            FieldDescriptor::new("Extra", TypeDescriptor::map(string(), TypeDescriptor::dynamic()))
                .with_json_tag("extra"),
        ]
    }
    let board = TypeDescriptor::structure("game::Board", "Board", fields);
    let out = Converter::new().add_type(board).convert().unwrap();
    assert_eq!(
        out,
        document(&[
            "export interface Item {\n    name: string;\n}",
            "export interface Board {\n    scores: {[key: string]: {[key: string]: number[]}};\n    grid: Item[][];\n    extra: {[key: string]: any};\n}",
        ])
    );
}

// =============================================================================
// Walk order and termination
// =============================================================================

#[test]
fn test_embedded_fields_inline_in_order() {
    let out = Converter::new().add_type(user()).convert().unwrap();
    assert_eq!(
        out,
        document(&["export interface User {\n    name: string;\n    id: number;\n    created: number;\n    email: string;\n}"])
    );
    assert!(!out.contains("interface Base"));
}

#[test]
fn test_mutual_references_terminate() {
    let out = Converter::new()
        .add_type(author())
        .add_type(post())
        .convert()
        .unwrap();
    assert_eq!(
        out,
        document(&[
            "export interface Post {\n    author: Author;\n    title: string;\n}",
            "export interface Author {\n    posts: Post[];\n}",
        ])
    );
    assert_eq!(out.matches("interface Post ").count(), 1);
    assert_eq!(out.matches("interface Author ").count(), 1);
}

#[test]
fn test_shared_dependency_emitted_once() {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("First", item()).with_json_tag("first"),
            FieldDescriptor::new("Second", TypeDescriptor::pointer(item())).with_json_tag("second"),
        ]
    }
    let pair = TypeDescriptor::structure("shop::Pair", "Pair", fields);
    let out = Converter::new()
        .add_type(pair)
        .add_type(item())
        .convert()
        .unwrap();
    assert_eq!(
        out,
        document(&[
            "export interface Item {\n    name: string;\n}",
            "export interface Pair {\n    first: Item;\n    second: Item;\n}",
        ])
    );
}

#[test]
fn test_dependencies_follow_discovery_order() {
    fn first_fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new("Value", number()).with_json_tag("value")]
    }
    fn second_fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new("Label", string()).with_json_tag("label")]
    }
    fn owner_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(
                "First",
                TypeDescriptor::structure("t::A", "A", first_fields),
            ),
            FieldDescriptor::new(
                "Second",
                TypeDescriptor::structure("t::B", "B", second_fields),
            ),
        ]
    }
    let owner = TypeDescriptor::structure("t::Owner", "Owner", owner_fields);
    let out = Converter::new().add_type(owner).convert().unwrap();
    assert_eq!(
        out,
        document(&[
            "export interface A {\n    value: number;\n}",
            "export interface B {\n    label: string;\n}",
            "export interface Owner {\n    First: A;\n    Second: B;\n}",
        ])
    );
}

#[test]
fn test_idempotent() {
    let converter = Converter::new()
        .with_prefix("T")
        .add_type(author())
        .add_type(catalog())
        .add_type(user());
    let first = converter.convert().unwrap();
    let second = converter.convert().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_conversions() {
    let converter = Converter::new().add_type(author()).add_type(catalog());
    let expected = converter.convert().unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| converter.convert().unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn test_override_precedence() {
    let specific = StructSpec::new(event())
        .with_field_type_opts(&timestamp(), TypeOptions::new().with_ts_type("Y"));
    let global = TypeOptions::new().with_ts_type("Z");

    let all = Converter::new()
        .add_struct(specific.clone())
        .manage_type(&timestamp(), global)
        .convert()
        .unwrap();
    assert!(all.contains("    when: Z;\n"));

    let without_global = Converter::new().add_struct(specific).convert().unwrap();
    assert!(without_global.contains("    when: Y;\n"));

    let tags_only = Converter::new().add_type(event()).convert().unwrap();
    assert!(tags_only.contains("    when: X;\n"));
}

#[test]
fn test_struct_specific_override_is_scoped_to_owner() {
    let out = Converter::new()
        .add_struct(
            StructSpec::new(event())
                .with_field_type_opts(&timestamp(), TypeOptions::new().with_ts_type("Date")),
        )
        .add_type(log())
        .convert()
        .unwrap();
    assert!(out.contains("    when: Date;\n"));
    assert!(out.contains("    at: number;\n"));
}

#[test]
fn test_global_override_matches_through_pointer() {
    let out = Converter::new()
        .add_type(log())
        .manage_type(
            &timestamp(),
            TypeOptions::new()
                .with_ts_type("string")
                .with_ts_doc("RFC 3339"),
        )
        .convert()
        .unwrap();
    assert!(out.contains("    /**\n     *\n     * RFC 3339\n     */\n    at: string;\n"));
}

#[test]
fn test_empty_override_doc_keeps_tag_doc() {
    let out = Converter::new()
        .add_type(page_parameter())
        .manage::<String>(TypeOptions::new().with_ts_doc(""))
        .convert()
        .unwrap();
    assert!(out.contains("     * search keyword\n"));
}

#[test]
fn test_override_replaces_struct_dependency() {
    let out = Converter::new()
        .add_type(catalog())
        .manage_type(
            &TypeDescriptor::map(string(), TypeDescriptor::pointer(item())),
            TypeOptions::new().with_ts_type("Record<string, unknown>"),
        )
        .convert()
        .unwrap();
    assert_eq!(
        out,
        document(&["export interface Catalog {\n    items: Record<string, unknown>;\n}"])
    );
}

// =============================================================================
// Placeholders
// =============================================================================

#[test]
fn test_placeholders_reset_per_structure() {
    fn inner_fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new("Data", TypeDescriptor::dynamic()).with_json_tag("data")]
    }
    fn outer_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("Meta", TypeDescriptor::dynamic()).with_json_tag("meta"),
            FieldDescriptor::new(
                "Inner",
                TypeDescriptor::structure("q::Inner", "Inner", inner_fields),
            )
            .with_json_tag("inner"),
            FieldDescriptor::new("Extra", TypeDescriptor::pointer(TypeDescriptor::dynamic()))
                .with_json_tag("extra"),
        ]
    }
    let outer = TypeDescriptor::structure("q::Outer", "Outer", outer_fields);
    let out = Converter::new().add_type(outer).convert().unwrap();
    assert_eq!(
        out,
        document(&[
            "export interface Inner<A = any> {\n    data: A;\n}",
            "export interface Outer<A = any, B = any> {\n    meta: A;\n    inner: Inner;\n    extra: B;\n}",
        ])
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unresolved_type_aborts() {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("Item", item()).with_json_tag("item"),
            FieldDescriptor::new("Initial", TypeDescriptor::scalar(Kind::Char))
                .with_json_tag("initial"),
        ]
    }
    let bad = TypeDescriptor::structure("shop::Bad", "Bad", fields);
    let err = Converter::new()
        .add_type(item())
        .add_type(bad)
        .convert()
        .unwrap_err();
    assert_eq!(err, ConvertError::unresolved("Bad", "Initial", Kind::Char));
    assert_eq!(err.to_string(), "cannot find type for char (Bad.Initial)");
}

#[test]
fn test_unresolved_in_dependency_aborts() {
    fn leaf_fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new("Nothing", TypeDescriptor::array(TypeDescriptor::scalar(Kind::Unit)))]
    }
    fn root_fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new(
            "Leaf",
            TypeDescriptor::structure("t::Leaf", "Leaf", leaf_fields),
        )]
    }
    let root = TypeDescriptor::structure("t::Root", "Root", root_fields);
    let err = Converter::new().add_type(root).convert().unwrap_err();
    assert_eq!(err, ConvertError::unresolved("Leaf", "Nothing", Kind::Unit));
}

#[test]
fn test_unmapped_field_with_override_is_fine() {
    fn fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new("Initial", TypeDescriptor::scalar(Kind::Char))
            .with_json_tag("initial")
            .with_ts_type("string")]
    }
    let ok = TypeDescriptor::structure("t::Ok", "Ok", fields);
    let out = Converter::new().add_type(ok).convert().unwrap();
    assert!(out.contains("    initial: string;\n"));
}

#[test]
fn test_not_a_struct() {
    let err = Converter::new()
        .add_type(TypeDescriptor::scalar(Kind::U32))
        .convert()
        .unwrap_err();
    assert_eq!(err, ConvertError::NotAStruct("u32".into()));
}

// =============================================================================
// Configuration and tracing
// =============================================================================

#[test]
fn test_config_matches_builder() {
    let config = ConverterConfig::from_toml_str(
        r#"
        prefix = "I"
        indent = "  "

        [types."app::Timestamp"]
        ts_type = "string"
        "#,
    )
    .unwrap();

    let from_config = Converter::from_config(&config)
        .add_type(log())
        .convert()
        .unwrap();
    let from_builder = Converter::new()
        .with_prefix("I")
        .with_indent("  ")
        .manage_type(&timestamp(), TypeOptions::new().with_ts_type("string"))
        .add_type(log())
        .convert()
        .unwrap();

    assert_eq!(from_config, from_builder);
    assert_eq!(from_config, document(&["export interface ILog {\n  at: string;\n}"]));
}

#[test]
fn test_debug_tracing_does_not_change_output() {
    let plain = Converter::new().add_type(author()).add_type(user());
    let traced = plain.clone().with_debug(true);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    let traced_out = tracing::subscriber::with_default(subscriber, || traced.convert().unwrap());

    assert_eq!(traced_out, plain.convert().unwrap());
}
