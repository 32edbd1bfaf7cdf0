//! Variable-list rendering

use crate::case::to_constant_case;
use crate::error::Result;
use crate::types::{NameFormat, PrintFormat, Variable, VariableList};
use serde_json::{Map, Value};

/// Render a variable list in the requested encoding.
///
/// With [`NameFormat::Constant`] every name is first normalized through
/// [`to_constant_case`]; order and values are untouched and the input list
/// is never mutated.
///
/// [`PrintFormat::Env`] emits one `NAME=value` line per variable in list
/// order, newline-terminated, with no quoting and absent values rendered as
/// empty. [`PrintFormat::Json`] emits a single 2-space-indented JSON object
/// with keys in encounter order; a later duplicate name overwrites the
/// earlier value but keeps the original key position, and no trailing
/// newline is added.
pub fn print_variable_list(
    list: &VariableList,
    print_format: PrintFormat,
    name_format: NameFormat,
) -> Result<String> {
    let transformed: Vec<Variable>;
    let variables: &[Variable] = match name_format {
        NameFormat::Constant => {
            transformed = list
                .iter()
                .map(|v| Variable {
                    name: to_constant_case(&v.name),
                    value: v.value.clone(),
                })
                .collect();
            &transformed
        }
        NameFormat::Source => &list.variables,
    };

    match print_format {
        PrintFormat::Env => Ok(variables
            .iter()
            .map(|v| format!("{}={}\n", v.name, v.value_or_empty()))
            .collect()),
        PrintFormat::Json => {
            let mut object = Map::new();
            for v in variables {
                object.insert(
                    v.name.clone(),
                    Value::String(v.value_or_empty().to_string()),
                );
            }
            Ok(serde_json::to_string_pretty(&Value::Object(object))?)
        }
    }
}
