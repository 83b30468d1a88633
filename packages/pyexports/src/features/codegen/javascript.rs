//! JavaScript wrapper module
//!
//! The wrapper registers the Python source with a `PythonApiClient` and
//! exposes one method per exported function. A method rejects calls with the
//! wrong number of arguments, then runs `return name(args...)` remotely with
//! every argument encoded by `JSON.stringify`.

use super::ModuleInfo;
use crate::errors::Result;
use crate::features::exports::FunctionRecord;

/// Render the wrapper module for `source`
pub fn render_javascript(
    module: &ModuleInfo,
    source: &str,
    functions: &[FunctionRecord],
) -> Result<String> {
    let name = module.name();
    let code = serde_json::to_string(source)?;

    let mut out = format!(
        concat!(
            "// Auto-generated from {name} by pyexports\n",
            "import {{ PythonApiClient }} from '{package}';\n",
            "\n",
            "export const {name} = (directorEndpoint) => {{\n",
            "  const client = new PythonApiClient(directorEndpoint, \"{name}\", {code});\n",
            "\n",
            "  const registration = client.register();\n",
            "\n",
            "  return {{\n",
            "    client,\n",
            "    registration,\n",
        ),
        name = name,
        package = module.client_package(),
        code = code,
    );
    for function in functions {
        out.push_str(&render_method(function));
    }
    out.push_str("  };\n};\n");

    Ok(out)
}

fn render_method(function: &FunctionRecord) -> String {
    let arity = function.parameters.len();
    let arguments = (0..arity)
        .map(|i| format!("${{JSON.stringify(args[{i}])}}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        concat!(
            "    {name}: (...args) => {{\n",
            "      if (args.length !== {arity}) {{\n",
            "        throw new Error(`Expected {arity} arguments, but got ${{args.length}}`);\n",
            "      }}\n",
            "      return client.executeScript(`return {name}({arguments})`);\n",
            "    }},\n",
        ),
        name = function.name,
        arity = arity,
        arguments = arguments,
    )
}
