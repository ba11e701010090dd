//! Type formatting for diagnostics and builtin names.

use crate::{Idx, TypePool, TypeData};

impl TypePool {
    /// Format a type the way it is spelled in source.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        match self.get(idx) {
            TypeData::Void => buf.push_str("void"),
            TypeData::Invalid => buf.push_str("<INVALID>"),
            TypeData::Scalar(kind) => buf.push_str(kind.name()),
            TypeData::Vector { component, columns } => {
                buf.push_str(vector_prefix(*component));
                buf.push(digit(*columns));
            }
            TypeData::Matrix {
                component,
                columns,
                rows,
            } => {
                buf.push_str(if *component == Idx::DOUBLE {
                    "dmat"
                } else {
                    "mat"
                });
                buf.push(digit(*columns));
                if columns != rows {
                    buf.push('x');
                    buf.push(digit(*rows));
                }
            }
            TypeData::Array { .. } => {
                // Outermost dimension first: `int a[2][3]` prints `int[2][3]`.
                let mut dims = Vec::new();
                let mut base = idx;
                while let TypeData::Array { element, size } = self.get(base) {
                    dims.push(*size);
                    base = *element;
                }
                self.format_type_into(base, buf);
                for size in dims {
                    buf.push('[');
                    if let Some(size) = size {
                        buf.push_str(&size.to_string());
                    }
                    buf.push(']');
                }
            }
            TypeData::Struct { name, .. }
            | TypeData::Generic { name, .. }
            | TypeData::Opaque { name } => buf.push_str(name),
        }
    }
}

fn vector_prefix(component: Idx) -> &'static str {
    match component {
        Idx::DOUBLE => "dvec",
        Idx::INT => "ivec",
        Idx::UINT => "uvec",
        Idx::BOOL => "bvec",
        _ => "vec",
    }
}

fn digit(n: u8) -> char {
    char::from_digit(u32::from(n), 10).unwrap_or('?')
}
