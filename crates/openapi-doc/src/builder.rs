//! Document builder.
//!
//! Maps a `TableCatalog` onto an `openapiv3::OpenAPI` value: one path item per base
//! table, each with a single `GET` operation carrying the fixed pagination/ordering
//! parameters, one filter parameter per column, the PostgREST request headers, and a
//! `200` array-of-rows response.

use crate::settings::DocumentSettings;
use openapiv3::{
    ArrayType, HeaderStyle, Info, IntegerType, MediaType, NumberType, ObjectType, OpenAPI,
    Operation, Parameter, ParameterData, ParameterSchemaOrContent, PathItem, Paths, QueryStyle,
    ReferenceOr, Response, Responses, Schema, SchemaData, SchemaKind, Server, StatusCode,
    StringType, Type,
};
use pgswag_catalog::types::{Table, TableCatalog};
use serde_json::json;

/// The closed target set of the type mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Integer,
    Boolean,
    String,
    Number,
}

impl JsonType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::String => "string",
            JsonType::Number => "number",
        }
    }
}

/// Map a catalog-reported type name onto a JSON Schema type.
///
/// Total over all inputs: anything outside the known names (arrays, json, uuid,
/// enums, bigint, ...) degrades to `string` so the generated document stays
/// structurally valid for exotic column types.
#[must_use]
pub fn map_type(declared: &str) -> JsonType {
    match declared {
        "integer" => JsonType::Integer,
        "boolean" => JsonType::Boolean,
        "text" | "character varying" | "character" => JsonType::String,
        "timestamp without time zone" | "timestamp with time zone" | "date" => JsonType::String,
        "numeric" | "double precision" | "real" => JsonType::Number,
        _ => JsonType::String,
    }
}

/// Build the OpenAPI document for a catalog.
///
/// Pure and total: an empty catalog yields an empty `paths` object, a table with no
/// columns yields a path with only the fixed parameters and an empty response
/// property set. Table and column order follow the catalog.
#[must_use]
pub fn build_document(catalog: &TableCatalog, settings: &DocumentSettings) -> OpenAPI {
    let mut paths = Paths::default();
    for table in catalog.tables() {
        paths
            .paths
            .insert(format!("/{}", table.name), ReferenceOr::Item(path_item(table)));
    }

    OpenAPI {
        openapi: "3.0.0".to_string(),
        info: Info {
            title: settings.title.clone(),
            version: settings.version.clone(),
            ..Default::default()
        },
        servers: vec![Server {
            url: settings.server_url.clone(),
            description: Some(settings.server_description.clone()),
            ..Default::default()
        }],
        paths,
        ..Default::default()
    }
}

fn path_item(table: &Table) -> PathItem {
    // Fixed query parameters first, filters in column order, headers last.
    let mut parameters = vec![
        query_param(
            "limit",
            "Limit the number of rows returned".to_string(),
            integer_schema(Some(1)),
        ),
        query_param(
            "offset",
            "Skip this many rows before returning".to_string(),
            integer_schema(Some(0)),
        ),
        query_param(
            "order",
            "Ordering, e.g. `column.asc` or `column.desc`".to_string(),
            plain_schema(JsonType::String),
        ),
    ];

    for col in &table.columns {
        parameters.push(query_param(
            &col.name,
            format!("Filter rows by {} ({})", col.name, col.declared_type),
            plain_schema(map_type(&col.declared_type)),
        ));
    }

    parameters.push(header_param(
        "Accept",
        "Preferred response media type".to_string(),
        string_schema_with_default(json!("application/json")),
    ));
    parameters.push(header_param(
        "Prefer",
        "Preference, e.g. `count=exact`".to_string(),
        plain_schema(JsonType::String),
    ));

    let mut responses = Responses::default();
    responses
        .responses
        .insert(StatusCode::Code(200), ReferenceOr::Item(list_response(table)));

    PathItem {
        get: Some(Operation {
            summary: Some(format!("List {}", table.name)),
            parameters,
            responses,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn list_response(table: &Table) -> Response {
    let mut object = ObjectType::default();
    for col in &table.columns {
        object.properties.insert(
            col.name.clone(),
            ReferenceOr::Item(Box::new(plain_schema(map_type(&col.declared_type)))),
        );
    }

    let rows = Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(Type::Array(ArrayType {
            items: Some(ReferenceOr::Item(Box::new(Schema {
                schema_data: SchemaData::default(),
                schema_kind: SchemaKind::Type(Type::Object(object)),
            }))),
            min_items: None,
            max_items: None,
            unique_items: false,
        })),
    };

    let mut response = Response {
        description: "OK".to_string(),
        ..Default::default()
    };
    response.content.insert(
        "application/json".to_string(),
        MediaType {
            schema: Some(ReferenceOr::Item(rows)),
            ..Default::default()
        },
    );
    response
}

fn query_param(name: &str, description: String, schema: Schema) -> ReferenceOr<Parameter> {
    ReferenceOr::Item(Parameter::Query {
        parameter_data: parameter_data(name, description, schema),
        allow_reserved: false,
        style: QueryStyle::Form,
        allow_empty_value: None,
    })
}

fn header_param(name: &str, description: String, schema: Schema) -> ReferenceOr<Parameter> {
    ReferenceOr::Item(Parameter::Header {
        parameter_data: parameter_data(name, description, schema),
        style: HeaderStyle::Simple,
    })
}

fn parameter_data(name: &str, description: String, schema: Schema) -> ParameterData {
    ParameterData {
        name: name.to_string(),
        description: Some(description),
        required: false,
        deprecated: None,
        format: ParameterSchemaOrContent::Schema(ReferenceOr::Item(schema)),
        example: None,
        examples: Default::default(),
        explode: None,
        extensions: Default::default(),
    }
}

/// Bare type declaration, no constraints.
fn plain_schema(ty: JsonType) -> Schema {
    let kind = match ty {
        JsonType::Integer => SchemaKind::Type(Type::Integer(IntegerType::default())),
        JsonType::Boolean => SchemaKind::Type(Type::Boolean(Default::default())),
        JsonType::String => SchemaKind::Type(Type::String(StringType::default())),
        JsonType::Number => SchemaKind::Type(Type::Number(NumberType::default())),
    };
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: kind,
    }
}

fn integer_schema(minimum: Option<i64>) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(Type::Integer(IntegerType {
            minimum,
            ..Default::default()
        })),
    }
}

fn string_schema_with_default(default: serde_json::Value) -> Schema {
    Schema {
        schema_data: SchemaData {
            default: Some(default),
            ..Default::default()
        },
        schema_kind: SchemaKind::Type(Type::String(StringType::default())),
    }
}
