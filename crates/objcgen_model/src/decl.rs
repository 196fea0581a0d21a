//! Type declarations and their members.
//!
//! A [`TypeDeclaration`] owns all of its members. Source lines are the line of the member's *name* (past any doc
//! comment); `0` means the line is unknown.

use super::errors::ModelError;
use super::stmt::{Expression, Statement};
use super::types::{PrimitiveKind, TypeName, TypeRef};

/// The kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Constant classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldClass {
    #[default]
    Ordinary,
    /// A primitive compile-time constant; inlined at use sites and never stored.
    PrimitiveConstant,
    /// A string compile-time constant; constructed by the string-constant startup routine.
    StringConstant,
}

impl FieldClass {
    /// Build a classification from the front end's independent constant flags.
    ///
    /// ## Errors
    /// - [`ModelError::ConflictingFieldClass`] if both flags are set.
    pub fn from_flags(field: &str, is_primitive_constant: bool, is_string_constant: bool) -> Result<Self, ModelError> {
        match (is_primitive_constant, is_string_constant) {
            (true, true) => Err(ModelError::ConflictingFieldClass {
                field: field.to_string(),
            }),
            (true, false) => Ok(FieldClass::PrimitiveConstant),
            (false, true) => Ok(FieldClass::StringConstant),
            (false, false) => Ok(FieldClass::Ordinary),
        }
    }
}

/// A field (static or instance variable).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    pub is_static: bool,
    /// The storage is already defined by the type's private declaration section.
    pub private_declaration: bool,
    pub is_volatile: bool,
    pub is_final: bool,
    pub initializer: Option<Expression>,
    pub class: FieldClass,
    /// Annotated as a synthesized property (instance fields only).
    pub is_property: bool,
    pub line: u32,
}

impl Field {
    /// An instance field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
            private_declaration: false,
            is_volatile: false,
            is_final: false,
            initializer: None,
            class: FieldClass::Ordinary,
            is_property: false,
            line: 0,
        }
    }

    /// A static field.
    pub fn new_static(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            is_static: true,
            ..Self::new(name, ty)
        }
    }

    /// `static final String NAME = "value";`
    pub fn string_constant(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new_static(name, TypeRef::string())
            .mark_final()
            .with_initializer(Expression::string(value))
            .with_class(FieldClass::StringConstant)
    }

    /// `static final <prim> NAME = <spelling>;`
    pub fn primitive_constant(name: impl Into<String>, kind: PrimitiveKind, spelling: impl Into<String>) -> Self {
        Self::new_static(name, TypeRef::Primitive(kind))
            .mark_final()
            .with_initializer(Expression::number(spelling))
            .with_class(FieldClass::PrimitiveConstant)
    }

    pub fn with_initializer(mut self, initializer: Expression) -> Self {
        self.initializer = Some(initializer);
        self
    }

    pub fn with_class(mut self, class: FieldClass) -> Self {
        self.class = class;
        self
    }

    pub fn mark_volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    pub fn mark_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn mark_property(mut self) -> Self {
        self.is_property = true;
        self
    }

    pub fn mark_private_declaration(mut self) -> Self {
        self.private_declaration = true;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn is_primitive_constant(&self) -> bool {
        self.class == FieldClass::PrimitiveConstant
    }

    pub fn is_string_constant(&self) -> bool {
        self.class == FieldClass::StringConstant
    }
}

/// A method or function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    /// The body assigns to the parameter.
    pub is_mutable: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_mutable: false,
        }
    }

    pub fn mark_mutable(mut self) -> Self {
        self.is_mutable = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Constructor,
    Instance,
    Static,
}

/// A method or constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub kind: MethodKind,
    pub params: Vec<Parameter>,
    pub return_type: TypeRef,
    /// `None` for abstract methods.
    pub body: Option<Statement>,
    /// Declared `native`; the front end has already substituted the embedded native body.
    pub is_native: bool,
    pub line: u32,
}

impl Method {
    pub fn new(name: impl Into<String>, kind: MethodKind, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind,
            params: Vec::new(),
            return_type,
            body: None,
            is_native: false,
            line: 0,
        }
    }

    pub fn constructor() -> Self {
        Self::new("<init>", MethodKind::Constructor, TypeRef::Void)
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_body(mut self, body: Statement) -> Self {
        self.body = Some(body);
        self
    }

    pub fn mark_native(mut self) -> Self {
        self.is_native = true;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == MethodKind::Constructor
    }

    pub fn is_static(&self) -> bool {
        self.kind == MethodKind::Static
    }

    pub fn is_abstract(&self) -> bool {
        self.body.is_none()
    }
}

/// A free (C-level) function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<Parameter>,
    pub return_type: TypeRef,
    pub body: Option<Statement>,
    /// Implemented on the other side of the JNI boundary.
    pub is_native: bool,
    pub is_static: bool,
    pub line: u32,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type,
            body: None,
            is_native: false,
            is_static: false,
            line: 0,
        }
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_body(mut self, body: Statement) -> Self {
        self.body = Some(body);
        self
    }

    pub fn mark_native(mut self) -> Self {
        self.is_native = true;
        self
    }

    pub fn mark_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

/// One enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub ordinal: usize,
    pub line: u32,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ordinal,
            line: 0,
        }
    }
}

/// Raw target-language code attached to a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeDeclaration {
    pub implementation_code: Option<String>,
    /// Emitted after the implementation block instead of inside it.
    pub is_outer: bool,
}

impl NativeDeclaration {
    pub fn inner(code: impl Into<String>) -> Self {
        Self {
            implementation_code: Some(code.into()),
            is_outer: false,
        }
    }

    pub fn outer(code: impl Into<String>) -> Self {
        Self {
            implementation_code: Some(code.into()),
            is_outer: true,
        }
    }

    /// A declaration with no implementation text (header-only).
    pub fn empty() -> Self {
        Self {
            implementation_code: None,
            is_outer: false,
        }
    }
}

/// A body member in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyDeclaration {
    Method(Method),
    Function(Function),
    Native(NativeDeclaration),
}

impl BodyDeclaration {
    /// Whether the member is emitted outside the implementation block.
    pub fn is_outer(&self) -> bool {
        match self {
            BodyDeclaration::Method(_) => false,
            BodyDeclaration::Function(_) => true,
            BodyDeclaration::Native(native) => native.is_outer,
        }
    }
}

/// One class, interface, enum or annotation type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    pub qualified_name: String,
    pub superclass: Option<TypeName>,
    pub interfaces: Vec<TypeName>,
    pub fields: Vec<Field>,
    pub body: Vec<BodyDeclaration>,
    pub enum_constants: Vec<EnumConstant>,
    /// Static initializers, enum constant construction and static blocks, in source order.
    pub class_init_statements: Vec<Statement>,
    pub is_dead_class: bool,
    pub needs_companion_class: bool,
    pub needs_class_init: bool,
    pub needs_type_literal: bool,
    /// The type is a subtype of the runtime's boxed-number class.
    pub is_boxed_numeric_subtype: bool,
    pub line: u32,
}

impl TypeDeclaration {
    pub fn new(kind: TypeKind, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let name = qualified_name.rsplit('.').next().unwrap_or_default().to_string();
        Self {
            kind,
            name,
            qualified_name,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            body: Vec::new(),
            enum_constants: Vec::new(),
            class_init_statements: Vec::new(),
            is_dead_class: false,
            needs_companion_class: false,
            needs_class_init: false,
            needs_type_literal: false,
            is_boxed_numeric_subtype: false,
            line: 0,
        }
    }

    pub fn with_superclass(mut self, superclass: TypeName) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn with_interface(mut self, interface: TypeName) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.body.push(BodyDeclaration::Method(method));
        self
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.body.push(BodyDeclaration::Function(function));
        self
    }

    pub fn with_native(mut self, native: NativeDeclaration) -> Self {
        self.body.push(BodyDeclaration::Native(native));
        self
    }

    /// Append an enum constant with the next ordinal.
    pub fn with_enum_constant(mut self, name: impl Into<String>) -> Self {
        let ordinal = self.enum_constants.len();
        self.enum_constants.push(EnumConstant::new(name, ordinal));
        self
    }

    pub fn with_class_init_statement(mut self, stmt: Statement) -> Self {
        self.class_init_statements.push(stmt);
        self
    }

    pub fn mark_dead(mut self) -> Self {
        self.is_dead_class = true;
        self
    }

    pub fn mark_needs_companion_class(mut self) -> Self {
        self.needs_companion_class = true;
        self
    }

    pub fn mark_needs_class_init(mut self) -> Self {
        self.needs_class_init = true;
        self
    }

    pub fn mark_needs_type_literal(mut self) -> Self {
        self.needs_type_literal = true;
        self
    }

    pub fn mark_boxed_numeric(mut self) -> Self {
        self.is_boxed_numeric_subtype = true;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Interface and annotation types.
    pub fn is_interface_type(&self) -> bool {
        matches!(self.kind, TypeKind::Interface | TypeKind::Annotation)
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn is_annotation(&self) -> bool {
        self.kind == TypeKind::Annotation
    }

    pub fn static_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_static)
    }

    pub fn instance_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_static)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.body.iter().filter_map(|decl| match decl {
            BodyDeclaration::Method(m) => Some(m),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.body.iter().filter_map(|decl| match decl {
            BodyDeclaration::Function(f) => Some(f),
            _ => None,
        })
    }

    pub fn native_declarations(&self) -> impl Iterator<Item = &NativeDeclaration> {
        self.body.iter().filter_map(|decl| match decl {
            BodyDeclaration::Native(n) => Some(n),
            _ => None,
        })
    }

    /// Members emitted inside the implementation block, in source order.
    pub fn inner_declarations(&self) -> impl Iterator<Item = &BodyDeclaration> {
        self.body.iter().filter(|decl| !decl.is_outer())
    }

    /// Members emitted after the implementation block, in source order.
    pub fn outer_declarations(&self) -> impl Iterator<Item = &BodyDeclaration> {
        self.body.iter().filter(|decl| decl.is_outer())
    }
}

/// One translated source file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub source_file_path: String,
    pub types: Vec<TypeDeclaration>,
}

impl CompilationUnit {
    pub fn new(source_file_path: impl Into<String>) -> Self {
        Self {
            source_file_path: source_file_path.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeDeclaration) -> Self {
        self.types.push(ty);
        self
    }
}
