//! Interface emission.
//!
//! An [`InterfaceBuilder`] accumulates the rendered field lines of one
//! structure and assembles the final `interface` block. Generic placeholders
//! for open-typed fields are allocated per builder, so lettering restarts at
//! `A` for every structure.

use crate::classify::{FieldClass, TypeRef};

/// The universal top type placeholders default to.
const TOP_TYPE: &str = "any";

/// Rendering settings shared by every interface of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStyle {
    /// Prepended to every interface name.
    pub prefix: String,
    /// Appended to every interface name.
    pub suffix: String,
    /// One indentation unit for field lines.
    pub indent: String,
    /// Whether interfaces get the `export` keyword.
    pub export: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            indent: "    ".to_string(),
            export: true,
        }
    }
}

impl OutputStyle {
    /// The interface name for a structure display name.
    pub fn interface_name(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }

    /// Render a nested type reference.
    pub fn render(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Scalar(name) => (*name).to_string(),
            TypeRef::Struct(s) => self.interface_name(s.name()),
            TypeRef::Array(element, depth) => {
                format!("{}{}", self.render(element), "[]".repeat(*depth))
            }
            TypeRef::Map(value) => format!("{{[key: string]: {}}}", self.render(value)),
            TypeRef::Any => TOP_TYPE.to_string(),
        }
    }
}

/// Accumulates the fields of one interface.
#[derive(Debug)]
pub struct InterfaceBuilder<'a> {
    style: &'a OutputStyle,
    fields: Vec<String>,
    placeholders: usize,
}

impl<'a> InterfaceBuilder<'a> {
    /// Create an empty builder.
    pub fn new(style: &'a OutputStyle) -> Self {
        Self {
            style,
            fields: Vec::new(),
            placeholders: 0,
        }
    }

    /// Add a field of a classified type.
    pub fn add_class(&mut self, name: &str, class: &FieldClass, doc: Option<&str>) {
        let ts_type = match class {
            FieldClass::Override(ts_type) => ts_type.clone(),
            FieldClass::Struct(s) => self.style.interface_name(s.name()),
            FieldClass::Map { value, .. } => {
                self.style.render(&TypeRef::Map(Box::new(value.clone())))
            }
            FieldClass::Array { element, depth } => {
                format!("{}{}", self.style.render(element), "[]".repeat(*depth))
            }
            FieldClass::Scalar(ts_type) => (*ts_type).to_string(),
            FieldClass::Dynamic => self.next_placeholder(),
        };
        self.add_field(name, &ts_type, doc);
    }

    /// Add a field with an already rendered type.
    pub fn add_field(&mut self, name: &str, ts_type: &str, doc: Option<&str>) {
        let indent = &self.style.indent;
        let mut line = String::new();
        if let Some(doc) = doc.filter(|d| !d.is_empty()) {
            line.push_str(&format!("{indent}/**\n{indent} *\n"));
            for doc_line in doc.lines() {
                line.push_str(&format!("{indent} * {doc_line}\n"));
            }
            line.push_str(&format!("{indent} */\n"));
        }
        line.push_str(&format!("{indent}{name}: {ts_type};"));
        self.fields.push(line);
    }

    /// The generic parameter list, e.g. `<A = any, B = any>`, or an empty
    /// string when no placeholder was allocated.
    pub fn generic_params(&self) -> String {
        if self.placeholders == 0 {
            return String::new();
        }
        let params: Vec<String> = (0..self.placeholders)
            .map(|index| format!("{} = {TOP_TYPE}", placeholder(index)))
            .collect();
        format!("<{}>", params.join(", "))
    }

    /// Assemble the interface block for the structure `name`.
    pub fn finish(self, name: &str) -> String {
        let mut out = String::new();
        if self.style.export {
            out.push_str("export ");
        }
        out.push_str(&format!(
            "interface {}{} {{\n",
            self.style.interface_name(name),
            self.generic_params()
        ));
        if !self.fields.is_empty() {
            out.push_str(&self.fields.join("\n"));
            out.push('\n');
        }
        out.push('}');
        out
    }

    fn next_placeholder(&mut self) -> String {
        let letter = placeholder(self.placeholders);
        self.placeholders += 1;
        letter
    }
}

/// Placeholder name for the `index`-th open field: `A`..`Z`, then `T26`, ...
fn placeholder(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => format!("T{index}"),
    }
}
