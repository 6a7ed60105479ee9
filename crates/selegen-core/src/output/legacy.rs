//! Selenium RC flavour: `SeleneseTestCase`, JUnit 3 naming conventions.

use super::Variant;

/// Static instance of the legacy variant for the registry.
pub static LEGACY: Variant = Variant {
    name: "legacy",
    description: "Selenium RC SeleneseTestCase (JUnit 3)",
    imports: &[
        "junit.framework.TestCase",
        "java.io.File",
        "org.apache.commons.io.FileUtils",
        "com.thoughtworks.selenium.*",
    ],
    superclass: "SeleneseTestCase",
    assert_prefix: "TestCase.",
    setup_annotation: None,
    teardown_annotation: None,
    test_annotation: None,
    session: &["super.setUp({url}, \"*\" + browser);"],
    teardown: &["selenium.stop();", "checkForVerificationErrors();"],
    overrides: &[],
};
