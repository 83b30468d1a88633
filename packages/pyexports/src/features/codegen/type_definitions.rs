//! `.d.ts` declarations for the wrapper module

use super::identifiers::binding_name;
use super::ModuleInfo;
use crate::features::exports::FunctionRecord;

/// Render declarations matching [`render_javascript`](super::render_javascript)
pub fn render_type_definitions(module: &ModuleInfo, functions: &[FunctionRecord]) -> String {
    let name = module.name();

    let mut out = format!(
        concat!(
            "// Auto-generated from {name} by pyexports\n",
            "import {{ AxiosResponse }} from 'axios';\n",
            "import {{ PythonApiClient, ExecuteResponse, RegisterResponse }} from '{package}';\n",
            "\n",
            "export declare const {name}: (directorEndpoint: string) => {{\n",
            "  client: PythonApiClient;\n",
            "  registration: Promise<AxiosResponse<RegisterResponse>>;\n",
        ),
        name = name,
        package = module.client_package(),
    );

    for function in functions {
        let parameters = function
            .parameters
            .iter()
            .map(|p| format!("{}: any", binding_name(p)))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  {}: ({}) => Promise<ExecuteResponse>;\n",
            function.name, parameters
        ));
    }
    out.push_str("};\n");

    out
}
