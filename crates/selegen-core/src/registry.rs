//! Registry of output variants.

use crate::output::Variant;
use std::sync::{OnceLock, RwLock};

static VARIANTS: RwLock<Vec<&'static Variant>> = RwLock::new(Vec::new());
static VARIANTS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom variant. A later registration does not shadow an
/// earlier one with the same name.
pub fn register_variant(variant: &'static Variant) {
    VARIANTS
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .push(variant);
}

fn init_variants() {
    VARIANTS_INITIALIZED.get_or_init(|| {
        register_variant(&crate::output::LEGACY);
        #[cfg(feature = "variant-webdriver")]
        {
            register_variant(&crate::output::WEBDRIVER);
        }
    });
}

/// Get a variant by name.
pub fn variant_for_name(name: &str) -> Option<&'static Variant> {
    init_variants();
    VARIANTS
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .iter()
        .find(|v| v.name == name)
        .copied()
}

/// Get all registered variants, in registration order.
pub fn variants() -> Vec<&'static Variant> {
    init_variants();
    VARIANTS.read().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_always_registered() {
        let variant = variant_for_name("legacy").expect("legacy variant");
        assert_eq!(variant.superclass, "SeleneseTestCase");
        assert_eq!(variants()[0].name, "legacy");
    }

    #[test]
    #[cfg(feature = "variant-webdriver")]
    fn test_webdriver_lookup() {
        let variant = variant_for_name("webdriver").expect("webdriver variant");
        assert_eq!(variant.test_annotation, Some("@Test"));
    }

    #[test]
    fn test_unknown_variant() {
        assert!(variant_for_name("python").is_none());
    }
}
