use std::fmt::Write;

use serde::Serialize;
use tessera_core::Colors;
use tessera_types::{LinkError, Linked, TypeId, TypeTable};

use super::fail;
use super::manifest_loader::Source;

pub struct ReflectArgs {
    pub source: Source,
    pub ty: String,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: ReflectArgs) {
    let linked = args.source.load().unwrap_or_else(|e| fail(e));
    let report = Reflection::of(&linked, &args.ty).unwrap_or_else(|e| fail(e));
    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(e),
        }
    } else {
        print!("{}", report.render(Colors::new(args.color)));
    }
}

/// Everything reflection knows about one type.
#[derive(Debug, Serialize)]
pub struct Reflection {
    pub key: String,
    #[serde(rename = "type")]
    pub type_str: String,
    pub kind: String,
    pub size: usize,
    pub dynamic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub args: usize,
    #[serde(rename = "super", skip_serializing_if = "Option::is_none")]
    pub super_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructs: Option<Vec<String>>,
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_owned).collect()
}

impl Reflection {
    pub fn of(linked: &Linked, key: &str) -> Result<Self, LinkError> {
        let id = linked.require(key)?;
        Ok(Self::describe(&linked.table, key, id))
    }

    fn describe(table: &TypeTable, key: &str, id: TypeId) -> Self {
        let kind = table.kind(id);
        let fields = table
            .instance_fields(id)
            .or_else(|| table.virtual_fields(id).map(owned));

        Self {
            key: key.to_owned(),
            type_str: table.type_str(id),
            kind: format!("{kind:?}"),
            size: table.size_of(kind),
            dynamic: table.is_dynamic(id),
            name: table.type_name(id).map(str::to_owned),
            args: table.arg_count(id),
            super_type: table.super_type(id).map(|s| table.type_str(s)),
            fields,
            constructs: table.enum_constructs(id).map(owned),
        }
    }

    /// Aligned `label: value` lines; absent facts are omitted.
    pub fn render(&self, colors: Colors) -> String {
        let c = colors;
        let mut lines: Vec<(&str, String)> = vec![
            ("type", format!("{}{}{}", c.name, self.type_str, c.reset)),
            ("kind", self.kind.clone()),
            ("size", self.size.to_string()),
            ("dynamic", self.dynamic.to_string()),
        ];
        if let Some(name) = &self.name {
            lines.push(("name", name.clone()));
        }
        if self.kind == "Function" {
            lines.push(("args", self.args.to_string()));
        }
        if let Some(super_type) = &self.super_type {
            lines.push(("super", super_type.clone()));
        }
        if let Some(fields) = &self.fields {
            lines.push(("fields", fields.join(", ")));
        }
        if let Some(constructs) = &self.constructs {
            lines.push(("constructs", constructs.join(", ")));
        }

        let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
        let mut out = String::new();
        for (label, value) in lines {
            let label = format!("{label}:");
            writeln!(out, "{}{label:<width$}{}  {value}", c.dim, c.reset).unwrap();
        }
        out
    }
}
