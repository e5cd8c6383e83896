/// File looked up in the workspace directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "release-tools.toml";

pub const DEFAULT_REGISTRY: &str = r#"
[[repository]]
name = "vscode-powershell"
owner = "PowerShell"
role = "aggregator"

[[repository.field]]
file = "package.json"
pattern = '^(?P<prefix>  "version": ")[^"]*(?P<suffix>",)$'
value = "version-core"

[[repository.field]]
file = "package.json"
pattern = '^(?P<prefix>  "name": ")[^"]*(?P<suffix>",)$'
value = "package-name"

[[repository.field]]
file = "package.json"
pattern = '^(?P<prefix>  "displayName": ")[^"]*(?P<suffix>",)$'
value = "display-name"

[[repository.field]]
file = "package.json"
pattern = '^(?P<prefix>  "description": ")[^"]*(?P<suffix>",)$'
value = "description"

[[repository.field]]
file = "package.json"
pattern = '^(?P<prefix>  "preview": )(?:true|false)(?P<suffix>,)$'
value = "preview-flag"

[[repository]]
name = "PowerShellEditorServices"
owner = "PowerShell"
role = "component"

[[repository.field]]
file = "PowerShellEditorServices.Common.props"
pattern = '^(?P<prefix>\s*<VersionPrefix>)[^<]*(?P<suffix></VersionPrefix>)$'
value = "version-prefix"

[[repository.field]]
file = "PowerShellEditorServices.Common.props"
pattern = '^(?P<prefix>\s*<VersionSuffix>)[^<]*(?P<suffix></VersionSuffix>)$'
value = "version-suffix"

[[repository.field]]
file = "module/PowerShellEditorServices/PowerShellEditorServices.psd1"
pattern = '''^(?P<prefix>\s*ModuleVersion\s*=\s*')[^']*(?P<suffix>')$'''
value = "version-core"
"#;
