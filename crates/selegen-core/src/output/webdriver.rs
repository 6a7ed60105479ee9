//! WebDriver flavour: the Selenium API backed by a WebDriver instance,
//! JUnit 4 annotations.
//!
//! WebDriver does not fire hover events by itself, so menus that open on
//! hover need an explicit `mouseOver` before clicking into them.

use super::{Override, Variant};

/// Static instance of the WebDriver variant for the registry.
pub static WEBDRIVER: Variant = Variant {
    name: "webdriver",
    description: "WebDriverBackedSelenium (JUnit 4)",
    imports: &[
        "org.junit.After",
        "org.junit.Before",
        "org.junit.Test",
        "java.io.File",
        "org.apache.commons.io.FileUtils",
        "org.openqa.selenium.WebDriver",
        "org.openqa.selenium.WebDriverBackedSelenium",
        "org.openqa.selenium.chrome.ChromeDriver",
        "org.openqa.selenium.firefox.FirefoxDriver",
        "com.thoughtworks.selenium.SeleneseTestBase",
    ],
    superclass: "SeleneseTestBase",
    assert_prefix: "",
    setup_annotation: Some("@Before"),
    teardown_annotation: Some("@After"),
    test_annotation: Some("@Test"),
    session: &[
        "WebDriver driver = \"chrome\".equals(browser) ? new ChromeDriver() : new FirefoxDriver();",
        "selenium = new WebDriverBackedSelenium(driver, {url});",
    ],
    teardown: &["selenium.stop();", "checkForVerificationErrors();"],
    overrides: &[
        ("click", Override::HoverTarget),
        ("clickAndWait", Override::HoverTarget),
        ("open", Override::HoverAfter("//body")),
    ],
};
