/// Configuration macros for zero-repetition config definitions
///
/// `config_struct!` defines a configuration structure and its defaults in a
/// single declaration. It generates:
/// - The struct with public fields
/// - The Default implementation
/// - Serde serialization/deserialization with `#[serde(default)]`, so a
///   TOML file only has to mention the fields it changes
///
/// # Example
/// ```
/// use stock_price_checker::config_struct;
///
/// config_struct! {
///     pub struct QuotesConfig {
///         base_url: String = "https://example.com".to_string(),
///         timeout_secs: u64 = 10,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
