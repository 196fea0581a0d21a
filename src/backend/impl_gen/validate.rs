//! Contract checks run before any output is written.

use std::collections::HashMap;

use objcgen_core::selectors::is_designated_selector;
use objcgen_model::FieldClass;

use super::{GenerateError, ImplementationGenerator};

impl<'a> ImplementationGenerator<'a> {
    pub(super) fn validate(&self) -> Result<(), GenerateError> {
        self.validate_constants()?;
        self.validate_selectors()?;
        self.validate_properties()?;
        self.validate_enum_constants()
    }

    fn validate_constants(&self) -> Result<(), GenerateError> {
        for field in &self.ty.fields {
            let reason = match field.class {
                FieldClass::Ordinary => None,
                FieldClass::PrimitiveConstant if !field.ty.is_primitive() => Some("its type is not primitive"),
                FieldClass::PrimitiveConstant if field.initializer.is_none() => Some("it has no initializer"),
                FieldClass::PrimitiveConstant => None,
                FieldClass::StringConstant if !field.ty.is_string() => Some("its type is not java.lang.String"),
                FieldClass::StringConstant => None,
            };
            if let Some(reason) = reason {
                return Err(GenerateError::InconsistentConstant {
                    type_name: self.type_name.clone(),
                    field: field.name.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }

    fn validate_selectors(&self) -> Result<(), GenerateError> {
        for method in self.ty.methods() {
            let selector = self.ctx.names.method_selector(method);
            let keywords = selector.matches(':').count();
            if keywords != method.params.len() {
                return Err(GenerateError::SelectorArityMismatch {
                    selector,
                    keywords,
                    params: method.params.len(),
                });
            }
            if !method.is_constructor() && is_designated_selector(&selector, self.ty.is_boxed_numeric_subtype) {
                return Err(GenerateError::DesignatedSelectorOnNonConstructor {
                    type_name: self.type_name.clone(),
                    method: method.name.clone(),
                    selector,
                });
            }
        }
        Ok(())
    }

    fn validate_properties(&self) -> Result<(), GenerateError> {
        let mut storage_owners: HashMap<String, &str> = HashMap::new();
        for field in self.ty.instance_fields().filter(|f| f.is_property) {
            let storage = self.ctx.names.instance_var_name(field);
            if let Some(first) = storage_owners.get(&storage) {
                return Err(GenerateError::AliasedPropertyStorage {
                    type_name: self.type_name.clone(),
                    first: first.to_string(),
                    second: field.name.clone(),
                    storage,
                });
            }
            storage_owners.insert(storage, field.name.as_str());
        }
        Ok(())
    }

    fn validate_enum_constants(&self) -> Result<(), GenerateError> {
        if !self.ty.is_enum() {
            if self.ty.enum_constants.is_empty() {
                return Ok(());
            }
            return Err(GenerateError::EnumConstantsOnNonEnum {
                type_name: self.type_name.clone(),
                count: self.ty.enum_constants.len(),
            });
        }
        for (expected, constant) in self.ty.enum_constants.iter().enumerate() {
            if constant.ordinal != expected {
                return Err(GenerateError::EnumOrdinalMismatch {
                    type_name: self.type_name.clone(),
                    constant: constant.name.clone(),
                    expected,
                    found: constant.ordinal,
                });
            }
        }
        Ok(())
    }
}
