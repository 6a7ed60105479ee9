//! The closed table of built-in Selenese commands.

use super::handler::Arity::{None as NoArgs, Target, TargetAt, TargetValue};
use super::handler::Check::{Equals, Is, Matches};
use super::handler::{Arity, Check, Condition, Handler, Query};

const fn action(method: &'static str, arity: Arity) -> Handler {
    Handler::Action { method, arity }
}

const fn and_wait(method: &'static str, arity: Arity) -> Handler {
    Handler::ActionAndWait { method, arity }
}

const fn assert(query: Query, check: Check) -> Handler {
    Handler::Assert(Condition::new(query, check))
}

const fn verify(query: Query, check: Check) -> Handler {
    Handler::Verify(Condition::new(query, check))
}

const fn wait_for(query: Query, check: Check) -> Handler {
    Handler::WaitFor(Condition::new(query, check))
}

const fn extension(function: &'static str, arity: Arity, wait: bool) -> Handler {
    Handler::Extension {
        function,
        arity,
        wait,
    }
}

pub(super) static BUILTIN: &[(&str, Handler)] = &[
    // Actions
    ("addSelection", action("addSelection", TargetValue)),
    ("check", action("check", Target)),
    ("chooseCancelOnNextConfirmation", action("chooseCancelOnNextConfirmation", NoArgs)),
    ("chooseOkOnNextConfirmation", action("chooseOkOnNextConfirmation", NoArgs)),
    ("click", action("click", Target)),
    ("clickAt", action("clickAt", TargetAt)),
    ("close", action("close", NoArgs)),
    ("contextMenu", action("contextMenu", Target)),
    ("deleteCookie", action("deleteCookie", TargetValue)),
    ("doubleClick", action("doubleClick", Target)),
    ("doubleClickAt", action("doubleClickAt", TargetAt)),
    ("dragAndDropToObject", action("dragAndDropToObject", TargetValue)),
    ("focus", action("focus", Target)),
    ("keyDown", action("keyDown", TargetValue)),
    ("keyPress", action("keyPress", TargetValue)),
    ("keyUp", action("keyUp", TargetValue)),
    ("mouseDown", action("mouseDown", Target)),
    ("mouseDownAt", action("mouseDownAt", TargetValue)),
    ("mouseDownRight", action("mouseDownRight", Target)),
    ("mouseMoveAt", action("mouseMoveAt", TargetAt)),
    ("mouseOut", action("mouseOut", Target)),
    ("mouseOver", action("mouseOver", Target)),
    ("mouseUp", action("mouseUp", Target)),
    ("mouseUpAt", action("mouseUpAt", TargetValue)),
    ("open", action("open", Target)),
    ("refresh", action("refresh", NoArgs)),
    ("select", action("select", TargetValue)),
    ("selectFrame", action("selectFrame", Target)),
    ("selectWindow", action("selectWindow", Target)),
    ("setSpeed", action("setSpeed", Target)),
    ("type", action("type", TargetValue)),
    ("typeKeys", action("typeKeys", TargetValue)),
    ("uncheck", action("uncheck", Target)),
    ("waitForNotSpeed", action("waitForNotSpeed", Target)),
    ("waitForPopUp", action("waitForPopUp", TargetValue)),
    ("waitForSpeed", action("waitForSpeed", Target)),
    ("windowMaximize", action("windowMaximize", NoArgs)),
    // Actions followed by a page load
    ("checkAndWait", and_wait("check", Target)),
    ("clickAndWait", and_wait("click", Target)),
    ("clickAtAndWait", and_wait("clickAt", TargetAt)),
    ("refreshAndWait", and_wait("refresh", NoArgs)),
    ("selectAndWait", and_wait("select", TargetValue)),
    // Misc
    ("echo", Handler::Echo),
    ("pause", Handler::Pause),
    // Assertions
    ("assertAlert", assert(Query::Alert, Matches)),
    ("assertConfirmation", assert(Query::Confirmation, Matches)),
    ("assertElementNotPresent", assert(Query::ElementPresent, Is(false))),
    ("assertElementPresent", assert(Query::ElementPresent, Is(true))),
    ("assertLocation", assert(Query::Location, Matches)),
    ("assertNotVisible", assert(Query::Visible, Is(false))),
    ("assertTextNotPresent", assert(Query::TextPresent, Is(false))),
    ("assertTextPresent", assert(Query::TextPresent, Is(true))),
    ("assertValue", assert(Query::Value, Equals)),
    ("assertVisible", assert(Query::Visible, Is(true))),
    // Verifications
    ("verifyAttribute", verify(Query::Attribute, Equals)),
    ("verifyChecked", verify(Query::Checked, Is(true))),
    ("verifyConfirmation", verify(Query::Confirmation, Matches)),
    ("verifyElementNotPresent", verify(Query::ElementPresent, Is(false))),
    ("verifyElementPositionTop", verify(Query::ElementPositionTop, Equals)),
    ("verifyElementPresent", verify(Query::ElementPresent, Is(true))),
    ("verifyEval", verify(Query::Eval, Equals)),
    ("verifyLocation", verify(Query::Location, Equals)),
    ("verifyNotChecked", verify(Query::Checked, Is(false))),
    ("verifyNotVisible", verify(Query::Visible, Is(false))),
    ("verifyOrdered", verify(Query::Ordered, Is(true))),
    ("verifySelectedLabel", verify(Query::SelectedLabel, Equals)),
    ("verifySelectedValue", verify(Query::SelectedValue, Equals)),
    ("verifyText", verify(Query::Text, Equals)),
    ("verifyTextNotPresent", verify(Query::TextPresent, Is(false))),
    ("verifyTextPresent", verify(Query::TextPresent, Is(true))),
    ("verifyTitle", verify(Query::Title, Equals)),
    ("verifyValue", verify(Query::Value, Equals)),
    ("verifyVisible", verify(Query::Visible, Is(true))),
    // Waits
    ("waitForAlert", wait_for(Query::Alert, Matches)),
    ("waitForAttribute", wait_for(Query::Attribute, Matches)),
    ("waitForChecked", wait_for(Query::Checked, Is(true))),
    ("waitForConfirmation", wait_for(Query::Confirmation, Equals)),
    ("waitForConfirmationPresent", wait_for(Query::ConfirmationPresent, Is(true))),
    ("waitForElementNotPresent", wait_for(Query::ElementPresent, Is(false))),
    ("waitForElementPresent", wait_for(Query::ElementPresent, Is(true))),
    ("waitForLocation", wait_for(Query::Location, Equals)),
    ("waitForNotChecked", wait_for(Query::Checked, Is(false))),
    ("waitForNotVisible", wait_for(Query::Visible, Is(false))),
    ("waitForSelectedValue", wait_for(Query::SelectedValue, Matches)),
    ("waitForTable", wait_for(Query::Table, Equals)),
    ("waitForText", wait_for(Query::Text, Matches)),
    ("waitForTextNotPresent", wait_for(Query::TextPresent, Is(false))),
    ("waitForTextPresent", wait_for(Query::TextPresent, Is(true))),
    ("waitForTitle", wait_for(Query::Title, Equals)),
    ("waitForValue", wait_for(Query::Value, Matches)),
    ("waitForVisible", wait_for(Query::Visible, Is(true))),
    // Stores
    ("store", Handler::Store(Query::Literal)),
    ("storeAttribute", Handler::Store(Query::Attribute)),
    ("storeConfirmation", Handler::Store(Query::Confirmation)),
    ("storeElementPositionTop", Handler::Store(Query::ElementPositionTop)),
    ("storeEval", Handler::Store(Query::Eval)),
    ("storeLocation", Handler::Store(Query::Location)),
    ("storeText", Handler::Store(Query::Text)),
    ("storeTexttmp", Handler::Store(Query::Text)),
    ("storeTitle", Handler::Store(Query::Title)),
    ("storeValue", Handler::Store(Query::Value)),
    ("storeXpathCount", Handler::Store(Query::XpathCount)),
    // User extension functions
    ("TypeFCKEditor", extension("doTypeFCKEditor", TargetValue, false)),
    ("TypeRandom", extension("doTypeRandom", TargetValue, false)),
    ("TypeRandomEmail", extension("doTypeRandomEmail", TargetValue, false)),
    ("TypeRepeated", extension("doTypeRepeated", TargetValue, false)),
    ("componentExoContextMenu", extension("doComponentExoContextMenu", Target, false)),
    ("componentExoContextMenuAndWait", extension("doComponentExoContextMenu", Target, true)),
    ("componentExoDoubleClick", extension("doComponentExoDoubleClick", Target, false)),
    ("getExoExtensionVersion", extension("doGetExoExtensionVersion", NoArgs, false)),
];
