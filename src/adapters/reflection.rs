//! Server reflection for `media.v1`.
//!
//! The descriptor is assembled from the same definitions as `proto/media.proto`
//! so reflection works without a protoc-produced descriptor set on disk.

use prost_types::{
    field_descriptor_proto::{Label, Type},
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MessageOptions, MethodDescriptorProto, ServiceDescriptorProto,
};

use crate::adapters::grpc_service::METHOD_NAMES;

const PACKAGE: &str = "media.v1";

fn field(name: &str, number: i32, label: Label, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(label as i32),
        r#type: Some(ty as i32),
        json_name: Some(json_name(name)),
        ..Default::default()
    }
}

fn scalar(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    field(name, number, Label::Optional, ty)
}

fn repeated(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    field(name, number, Label::Repeated, ty)
}

fn message_field(name: &str, number: i32, label: Label, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(format!(".{}.{}", PACKAGE, type_name)),
        ..field(name, number, label, Type::Message)
    }
}

/// `file_id` -> `fileId`
fn json_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

/// A `map<string, string>` field plus the entry type protoc would synthesize.
fn string_map(owner: &str, name: &str, number: i32) -> (FieldDescriptorProto, DescriptorProto) {
    let entry = format!("{}Entry", json_name(&format!("_{}", name)));
    let field = message_field(name, number, Label::Repeated, &format!("{}.{}", owner, entry));
    let entry = DescriptorProto {
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..message(
            &entry,
            vec![scalar("key", 1, Type::String), scalar("value", 2, Type::String)],
        )
    };
    (field, entry)
}

fn with_map(
    owner: &str,
    mut fields: Vec<FieldDescriptorProto>,
    map_name: &str,
    map_number: i32,
) -> DescriptorProto {
    let (map_field, entry) = string_map(owner, map_name, map_number);
    fields.push(map_field);
    DescriptorProto {
        nested_type: vec![entry],
        ..message(owner, fields)
    }
}

/// `FileDetails`, `success`, `error_message`: the shape shared by single-file responses.
fn file_envelope(name: &str) -> DescriptorProto {
    message(
        name,
        vec![
            message_field("file", 1, Label::Optional, "FileDetails"),
            scalar("success", 2, Type::Bool),
            scalar("error_message", 3, Type::String),
        ],
    )
}

fn messages() -> Vec<DescriptorProto> {
    vec![
        with_map(
            "FileDetails",
            vec![
                scalar("file_id", 1, Type::String),
                scalar("name", 2, Type::String),
                scalar("url", 3, Type::String),
                scalar("thumbnail_url", 4, Type::String),
                scalar("size", 5, Type::Int64),
                scalar("file_type", 6, Type::String),
                repeated("tags", 7, Type::String),
                scalar("folder_path", 8, Type::String),
                scalar("created_at", 9, Type::String),
                scalar("updated_at", 10, Type::String),
                scalar("width", 11, Type::Int32),
                scalar("height", 12, Type::Int32),
            ],
            "custom_metadata",
            13,
        ),
        message("GetUploadAuthRequest", Vec::new()),
        message(
            "GetUploadAuthResponse",
            vec![
                scalar("token", 1, Type::String),
                scalar("expire", 2, Type::Int64),
                scalar("signature", 3, Type::String),
                scalar("public_key", 4, Type::String),
                scalar("success", 5, Type::Bool),
                scalar("error_message", 6, Type::String),
            ],
        ),
        message(
            "UploadFileRequest",
            vec![
                scalar("file_data", 1, Type::Bytes),
                scalar("filename", 2, Type::String),
                scalar("folder", 3, Type::String),
                repeated("tags", 4, Type::String),
                scalar("use_unique_filename", 5, Type::Bool),
                scalar("custom_coordinates", 6, Type::String),
            ],
        ),
        file_envelope("UploadFileResponse"),
        message("GetFileDetailsRequest", vec![scalar("file_id", 1, Type::String)]),
        file_envelope("GetFileDetailsResponse"),
        message(
            "GetFilesRequest",
            vec![
                scalar("skip", 1, Type::Int32),
                scalar("limit", 2, Type::Int32),
                scalar("search_query", 3, Type::String),
                repeated("tags", 4, Type::String),
                scalar("file_type", 5, Type::String),
                scalar("sort", 6, Type::String),
                scalar("path", 7, Type::String),
            ],
        ),
        message(
            "GetFilesResponse",
            vec![
                message_field("files", 1, Label::Repeated, "FileDetails"),
                scalar("success", 2, Type::Bool),
                scalar("error_message", 3, Type::String),
                scalar("total_count", 4, Type::Int32),
            ],
        ),
        with_map(
            "UpdateFileDetailsRequest",
            vec![
                scalar("file_id", 1, Type::String),
                repeated("tags", 2, Type::String),
                scalar("custom_coordinates", 3, Type::String),
            ],
            "custom_metadata",
            4,
        ),
        file_envelope("UpdateFileDetailsResponse"),
        message("DeleteFileRequest", vec![scalar("file_id", 1, Type::String)]),
        message(
            "DeleteFileResponse",
            vec![
                scalar("success", 1, Type::Bool),
                scalar("error_message", 2, Type::String),
            ],
        ),
        message(
            "DeleteMultipleFilesRequest",
            vec![repeated("file_ids", 1, Type::String)],
        ),
        message(
            "DeleteResult",
            vec![
                scalar("file_id", 1, Type::String),
                scalar("success", 2, Type::Bool),
                scalar("error_message", 3, Type::String),
            ],
        ),
        message(
            "DeleteMultipleFilesResponse",
            vec![
                message_field("results", 1, Label::Repeated, "DeleteResult"),
                scalar("all_success", 2, Type::Bool),
                scalar("error_message", 3, Type::String),
            ],
        ),
    ]
}

fn method(name: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(format!(".{}.{}Request", PACKAGE, name)),
        output_type: Some(format!(".{}.{}Response", PACKAGE, name)),
        ..Default::default()
    }
}

fn service() -> ServiceDescriptorProto {
    ServiceDescriptorProto {
        name: Some("MediaService".to_string()),
        method: METHOD_NAMES.into_iter().map(method).collect(),
        ..Default::default()
    }
}

pub fn file_descriptor_set() -> FileDescriptorSet {
    FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("media.proto".to_string()),
            package: Some(PACKAGE.to_string()),
            message_type: messages(),
            service: vec![service()],
            syntax: Some("proto3".to_string()),
            ..Default::default()
        }],
    }
}
