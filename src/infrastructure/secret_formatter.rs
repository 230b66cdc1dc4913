use crate::domain::secret::value_to_text;
use crate::domain::{Formatter, OutputFormat, Secret, Ui};

const WARNINGS_BANNER: &str = "The following warnings were returned from the Vault server:";

/// Table, JSON and YAML rendering of a whole secret.
pub struct SecretFormatter;

impl Formatter for SecretFormatter {
    fn render(&self, ui: &mut dyn Ui, format: &str, secret: &Secret) -> i32 {
        let format = match format.parse::<OutputFormat>() {
            Ok(format) => format,
            Err(e) => {
                ui.error(&e);
                return 1;
            }
        };

        let rendered = match format {
            OutputFormat::Table => Ok(render_table(secret)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(secret).map_err(|e| e.to_string())
            }
            OutputFormat::Yaml => serde_yaml::to_string(secret)
                .map(|s| s.trim_end().to_string())
                .map_err(|e| e.to_string()),
        };

        match rendered {
            Ok(text) => {
                ui.output(&text);
                if format == OutputFormat::Table && !secret.warnings.is_empty() {
                    ui.output(&format!("\n{}", WARNINGS_BANNER));
                    for warning in &secret.warnings {
                        ui.output(&format!("  * {}", warning));
                    }
                }
                0
            }
            Err(e) => {
                ui.error(&format!("Error formatting secret as {}: {}", format, e));
                1
            }
        }
    }
}

fn table_rows(secret: &Secret) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Key".to_string(), "Value".to_string()),
        ("---".to_string(), "-----".to_string()),
    ];

    if secret.lease_duration > 0 {
        if secret.lease_id.is_empty() {
            rows.push((
                "refresh_interval".to_string(),
                secret.lease_duration.to_string(),
            ));
        } else {
            rows.push(("lease_id".to_string(), secret.lease_id.clone()));
            rows.push((
                "lease_duration".to_string(),
                secret.lease_duration.to_string(),
            ));
            rows.push(("lease_renewable".to_string(), secret.renewable.to_string()));
        }
    }

    if let Some(auth) = &secret.auth {
        rows.push(("token".to_string(), auth.client_token.clone()));
        rows.push(("token_accessor".to_string(), auth.accessor.clone()));
        rows.push((
            "token_duration".to_string(),
            auth.lease_duration.to_string(),
        ));
        rows.push(("token_renewable".to_string(), auth.renewable.to_string()));
        rows.push((
            "token_policies".to_string(),
            format!("[{}]", auth.policies.join(" ")),
        ));
    }

    let mut keys: Vec<&String> = secret.data.keys().collect();
    keys.sort();
    for key in keys {
        rows.push((key.clone(), value_to_text(&secret.data[key.as_str()])));
    }

    rows
}

fn render_table(secret: &Secret) -> String {
    let rows = table_rows(secret);
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

    rows.iter()
        .map(|(key, value)| format!("{:<width$}    {}", key, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
