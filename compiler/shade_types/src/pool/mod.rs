//! Type pool: interning, builtin registration and structural queries.

mod format;

use rustc_hash::FxHashMap;

use crate::{Field, Idx, ScalarKind, TypeData};

/// Opaque handle types available to every program.
const OPAQUE_TYPES: &[&str] = &[
    "sampler1D",
    "sampler2D",
    "sampler3D",
    "samplerCube",
    "sampler2DRect",
    "sampler2DArray",
    "samplerExternalOES",
    "isampler2D",
    "usampler2D",
    "sampler",
    "texture2D",
    "subpassInput",
];

/// Interned storage for every type of one compilation.
///
/// Scalars, vectors, matrices, generic families and opaque types are
/// registered at construction under their source names. Arrays and structs
/// are interned on demand as declarations are processed.
#[derive(Clone, Debug)]
pub struct TypePool {
    map: FxHashMap<TypeData, Idx>,
    types: Vec<TypeData>,
    builtins: Vec<(String, Idx)>,
    builtin_index: FxHashMap<String, Idx>,
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

impl TypePool {
    pub fn new() -> Self {
        let mut pool = TypePool {
            map: FxHashMap::default(),
            types: Vec::with_capacity(128),
            builtins: Vec::new(),
            builtin_index: FxHashMap::default(),
        };
        // Order must match the fixed constants on `Idx`.
        for data in [
            TypeData::Void,
            TypeData::Invalid,
            TypeData::Scalar(ScalarKind::Bool),
            TypeData::Scalar(ScalarKind::Int),
            TypeData::Scalar(ScalarKind::UInt),
            TypeData::Scalar(ScalarKind::Float),
            TypeData::Scalar(ScalarKind::Double),
        ] {
            pool.intern(data);
        }
        debug_assert_eq!(pool.types.len(), Idx::PRIMITIVE_COUNT as usize);
        pool.register_builtins();
        pool
    }

    fn register_builtins(&mut self) {
        for idx in [Idx::VOID, Idx::BOOL, Idx::INT, Idx::UINT, Idx::FLOAT, Idx::DOUBLE] {
            self.add_builtin(idx);
        }

        let scalar_families = [Idx::FLOAT, Idx::DOUBLE, Idx::INT, Idx::UINT, Idx::BOOL];
        for component in scalar_families {
            for columns in 2..=4 {
                let vector = self.vector(component, columns);
                self.add_builtin(vector);
            }
        }

        for component in [Idx::FLOAT, Idx::DOUBLE] {
            for columns in 2..=4 {
                for rows in 2..=4 {
                    let matrix = self.matrix(component, columns, rows);
                    self.add_builtin(matrix);
                    if columns == rows {
                        // `mat3x3` spells the same type as `mat3`.
                        let alias = format!("{}x{rows}", self.format_type(matrix));
                        self.add_builtin_named(alias, matrix);
                    }
                }
            }
        }

        for name in OPAQUE_TYPES {
            let idx = self.intern(TypeData::Opaque {
                name: (*name).to_string(),
            });
            self.add_builtin(idx);
        }

        let generic_families = [
            ("$genType", Idx::FLOAT),
            ("$genDType", Idx::DOUBLE),
            ("$genIType", Idx::INT),
            ("$genUType", Idx::UINT),
            ("$genBType", Idx::BOOL),
        ];
        for (name, component) in generic_families {
            let mut candidates = vec![component];
            candidates.extend((2..=4).map(|columns| self.vector(component, columns)));
            let idx = self.generic(name, candidates);
            self.add_builtin(idx);
        }

        let vector_families = [
            ("$vec", Idx::FLOAT),
            ("$dvec", Idx::DOUBLE),
            ("$ivec", Idx::INT),
            ("$uvec", Idx::UINT),
            ("$bvec", Idx::BOOL),
        ];
        for (name, component) in vector_families {
            let candidates = (2..=4)
                .map(|columns| self.vector(component, columns))
                .collect();
            let idx = self.generic(name, candidates);
            self.add_builtin(idx);
        }

        let square = (2..=4).map(|n| self.matrix(Idx::FLOAT, n, n)).collect();
        let idx = self.generic("$mat", square);
        self.add_builtin(idx);
    }

    fn add_builtin(&mut self, idx: Idx) {
        let name = self.format_type(idx);
        self.add_builtin_named(name, idx);
    }

    fn add_builtin_named(&mut self, name: String, idx: Idx) {
        if self.builtin_index.insert(name.clone(), idx).is_none() {
            self.builtins.push((name, idx));
        }
    }

    /// Intern `data`, returning the existing handle for an equal type.
    pub fn intern(&mut self, data: TypeData) -> Idx {
        if let Some(&idx) = self.map.get(&data) {
            return idx;
        }
        let idx = Idx::from_raw(u32::try_from(self.types.len()).unwrap_or(u32::MAX));
        self.types.push(data.clone());
        self.map.insert(data, idx);
        idx
    }

    /// Handle of an already interned type.
    pub(crate) fn map_get(&self, data: &TypeData) -> Option<Idx> {
        self.map.get(data).copied()
    }

    /// # Panics
    /// Panics if `idx` did not come from this pool.
    #[inline]
    pub fn get(&self, idx: Idx) -> &TypeData {
        &self.types[idx.index()]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // === Construction ===

    pub fn vector(&mut self, component: Idx, columns: u8) -> Idx {
        self.intern(TypeData::Vector { component, columns })
    }

    pub fn matrix(&mut self, component: Idx, columns: u8, rows: u8) -> Idx {
        self.intern(TypeData::Matrix {
            component,
            columns,
            rows,
        })
    }

    /// `element[size]`, or `element[]` when `size` is `None`.
    pub fn array(&mut self, element: Idx, size: Option<u32>) -> Idx {
        self.intern(TypeData::Array { element, size })
    }

    pub fn struct_type(&mut self, name: impl Into<String>, fields: Vec<Field>) -> Idx {
        self.intern(TypeData::Struct {
            name: name.into(),
            fields,
        })
    }

    pub fn generic(&mut self, name: impl Into<String>, candidates: Vec<Idx>) -> Idx {
        self.intern(TypeData::Generic {
            name: name.into(),
            candidates,
        })
    }

    // === Builtins ===

    /// Every builtin type name with its handle, in registration order.
    pub fn builtins(&self) -> &[(String, Idx)] {
        &self.builtins
    }

    pub fn builtin(&self, name: &str) -> Option<Idx> {
        self.builtin_index.get(name).copied()
    }

    // === Queries ===

    pub fn scalar_kind(&self, idx: Idx) -> Option<ScalarKind> {
        match self.get(idx) {
            TypeData::Scalar(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_scalar(&self, idx: Idx) -> bool {
        matches!(self.get(idx), TypeData::Scalar(_))
    }

    pub fn is_vector(&self, idx: Idx) -> bool {
        matches!(self.get(idx), TypeData::Vector { .. })
    }

    pub fn is_matrix(&self, idx: Idx) -> bool {
        matches!(self.get(idx), TypeData::Matrix { .. })
    }

    /// Vectors and matrices.
    pub fn is_compound(&self, idx: Idx) -> bool {
        matches!(
            self.get(idx),
            TypeData::Vector { .. } | TypeData::Matrix { .. }
        )
    }

    pub fn is_array(&self, idx: Idx) -> bool {
        matches!(self.get(idx), TypeData::Array { .. })
    }

    pub fn is_struct(&self, idx: Idx) -> bool {
        matches!(self.get(idx), TypeData::Struct { .. })
    }

    pub fn is_generic(&self, idx: Idx) -> bool {
        matches!(self.get(idx), TypeData::Generic { .. })
    }

    pub fn is_opaque(&self, idx: Idx) -> bool {
        matches!(self.get(idx), TypeData::Opaque { .. })
    }

    /// Numeric scalar.
    pub fn is_number(&self, idx: Idx) -> bool {
        self.scalar_kind(idx).is_some_and(ScalarKind::is_number)
    }

    /// Integer scalar.
    pub fn is_integer(&self, idx: Idx) -> bool {
        self.scalar_kind(idx).is_some_and(ScalarKind::is_integer)
    }

    /// Columns of a vector or matrix; 1 for scalars, 0 otherwise.
    pub fn columns(&self, idx: Idx) -> u8 {
        match self.get(idx) {
            TypeData::Scalar(_) => 1,
            TypeData::Vector { columns, .. } | TypeData::Matrix { columns, .. } => *columns,
            _ => 0,
        }
    }

    /// Rows of a matrix; 1 for scalars and vectors, 0 otherwise.
    pub fn rows(&self, idx: Idx) -> u8 {
        match self.get(idx) {
            TypeData::Scalar(_) | TypeData::Vector { .. } => 1,
            TypeData::Matrix { rows, .. } => *rows,
            _ => 0,
        }
    }

    /// Scalar component of a vector or matrix; any other type is its own
    /// component.
    pub fn component_type(&self, idx: Idx) -> Idx {
        match self.get(idx) {
            TypeData::Vector { component, .. } | TypeData::Matrix { component, .. } => *component,
            _ => idx,
        }
    }

    pub fn element_type(&self, idx: Idx) -> Option<Idx> {
        match self.get(idx) {
            TypeData::Array { element, .. } => Some(*element),
            _ => None,
        }
    }

    /// Element count of a sized array.
    pub fn array_size(&self, idx: Idx) -> Option<u32> {
        match self.get(idx) {
            TypeData::Array { size, .. } => *size,
            _ => None,
        }
    }

    /// Members of a struct or interface block type; empty for other types.
    pub fn fields(&self, idx: Idx) -> &[Field] {
        match self.get(idx) {
            TypeData::Struct { fields, .. } => fields,
            _ => &[],
        }
    }

    /// Candidates of a generic type; empty for concrete types.
    pub fn candidates(&self, idx: Idx) -> &[Idx] {
        match self.get(idx) {
            TypeData::Generic { candidates, .. } => candidates,
            _ => &[],
        }
    }

    /// Arrays, and structs with an array anywhere inside.
    pub fn contains_array(&self, idx: Idx) -> bool {
        match self.get(idx) {
            TypeData::Array { .. } => true,
            TypeData::Struct { fields, .. } => fields.iter().any(|f| self.contains_array(f.ty)),
            _ => false,
        }
    }
}
