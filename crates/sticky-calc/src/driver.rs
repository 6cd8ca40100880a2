//! Unified calculator driver
//!
//! Any host that can press a calculator key and read back the display
//! implements [`CalculatorDriver`]; the `verify_*` scenarios below then run
//! unchanged against it, whether the keys come from a script, a terminal or
//! a hardware key-code table.

use tracing::trace;

use crate::core::{CalcResult, CalculatorEngine, EngineSnapshot, Operator};
use crate::display::DisplayConfig;
use crate::keys::{parse_script, LogicalKey};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses one key and returns the new display
    fn press(&mut self, key: LogicalKey) -> String;

    /// Returns the current display
    fn display(&self) -> String;

    /// Returns the operator the UI should highlight
    fn pending_operator(&self) -> Option<Operator>;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Presses keys in order and returns the final display
    fn press_all(&mut self, keys: &[LogicalKey]) -> String {
        for key in keys {
            self.press(*key);
        }
        self.display()
    }

    /// Parses and presses a whitespace separated key script
    ///
    /// Nothing is pressed if any token is unknown.
    fn press_script(&mut self, script: &str) -> CalcResult<String> {
        let keys = parse_script(script)?;
        Ok(self.press_all(&keys))
    }
}

/// Driver over an in-process [`CalculatorEngine`]
#[derive(Debug, Clone, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
    presses: usize,
}

impl EngineDriver {
    /// Creates a driver with default display settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with the given display settings
    #[must_use]
    pub fn with_display(display: DisplayConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_display(display),
            presses: 0,
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a snapshot of the engine state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot()
    }

    /// Returns the number of keys pressed since creation or reset
    #[must_use]
    pub const fn presses(&self) -> usize {
        self.presses
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, key: LogicalKey) -> String {
        self.presses += 1;
        let shown = self.engine.press(key);
        trace!(%key, %shown, "key pressed");
        shown
    }

    fn display(&self) -> String {
        self.engine.display()
    }

    fn pending_operator(&self) -> Option<Operator> {
        self.engine.pending_operator()
    }

    fn reset(&mut self) {
        self.engine = CalculatorEngine::with_display(self.engine.display_config().clone());
        self.presses = 0;
    }
}

// ===== Unified Test Scenarios =====
// These scenarios work with ANY CalculatorDriver implementation

/// Verifies digit entry rules: no leading zeros, one decimal point
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    assert_eq!(driver.press_script("0")?, "0");
    assert_eq!(driver.press_script("0 0 1 2 . 5")?, "12.5");
    assert_eq!(driver.press_script(". 7")?, "12.57");
    driver.reset();
    assert_eq!(driver.press_script(". .")?, "0.");
    driver.reset();
    assert_eq!(driver.press_script("5 - 5 = 3")?, "3");
    driver.reset();
    Ok(())
}

/// Verifies sticky equals: a repeated `=` reapplies the last right operand
pub fn verify_sticky_equals<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    assert_eq!(driver.press_script("7 7 + 3 =")?, "80");
    assert_eq!(driver.press_script("=")?, "83");
    assert_eq!(driver.press_script("=")?, "86");
    assert_eq!(driver.pending_operator(), Some(Operator::Add));
    driver.reset();
    Ok(())
}

/// Verifies sign toggle, percent and backspace
pub fn verify_commands<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    assert_eq!(driver.press_script("4 plus-minus")?, "-4");
    assert_eq!(driver.press_script("plus-minus")?, "4");
    driver.reset();
    assert_eq!(driver.press_script("5 0 percent")?, "0.5");
    driver.reset();
    assert_eq!(driver.press_script("backspace")?, "0");
    assert_eq!(driver.press_script("1 2 backspace")?, "1");
    driver.reset();
    Ok(())
}

/// Verifies that division by zero is shown, not raised
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    assert_eq!(driver.press_script("9 / =")?, "Infinity");
    driver.reset();
    Ok(())
}

/// Verifies that clear returns to the initial state from anywhere
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    assert_eq!(driver.press_script("1 2 * 3 = = clear")?, "0");
    assert_eq!(driver.pending_operator(), None);
    assert_eq!(driver.press_script("=")?, "0");
    assert_eq!(driver.press_script("clear clear")?, "0");
    driver.reset();
    Ok(())
}

/// Runs every scenario against a driver
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_sticky_equals(driver)?;
    verify_commands(driver)?;
    verify_divide_by_zero(driver)?;
    verify_clear(driver)
}
