// ============================================================================
// Basic Usage Example
// ============================================================================

use operand_calc::prelude::*;
use std::sync::Arc;

fn key(label: char) -> Key {
    Key::from_label(label).expect("ring label")
}

fn print_frame(adapter: &str, frame: &DisplaySnapshot) {
    println!(
        "[{}] {} = {}  ({})",
        adapter, frame.expression, frame.result, frame.caption
    );
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Operand Calculator Example ===\n");

    // Keypad: type A, flip the latch, type B
    let mut keypad = CalculatorBuilder::new("keypad-demo")
        .keypad()
        .build(Arc::new(LoggingEventHandler))?;

    for label in "12.5".chars() {
        keypad.handle_input(&InputEvent::KeyActivate(key(label)));
    }
    keypad.handle_input(&InputEvent::Command(Command::ToggleLatch));
    let frame = keypad.handle_input(&InputEvent::KeyActivate(key('3')));
    print_frame(keypad.adapter_name(), &frame);

    // Dial: one swipe per operand, then pick an operation on the wheel
    let mut dial = CalculatorBuilder::new("dial-demo")
        .dial()
        .build(Arc::new(LoggingEventHandler))?;

    dial.handle_input(&InputEvent::KeyPress(key('5')));
    dial.handle_input(&InputEvent::GestureEnd);
    dial.handle_input(&InputEvent::KeyPress(key('2')));
    dial.handle_input(&InputEvent::GestureEnd);
    let frame = dial.handle_input(&InputEvent::WheelPointer { dx: -0.5, dy: -0.5 });
    print_frame(dial.adapter_name(), &frame);

    // Clock: lock A, then retype B
    let mut clock = CalculatorBuilder::new("clock-demo")
        .clock()
        .with_initial_operation(OperationSymbol::Divide)
        .build(Arc::new(NoOpEventHandler))?;

    clock.handle_input(&InputEvent::KeyActivate(key('1')));
    clock.handle_input(&InputEvent::FieldTap(OperandSlot::A));
    for label in ['0', '4', '8'] {
        let frame = clock.handle_input(&InputEvent::KeyActivate(key(label)));
        print_frame(clock.adapter_name(), &frame);
    }

    // Plain evaluation without a widget
    println!("\n=== Direct Evaluation ===");
    for (op, a, b) in [
        (OperationSymbol::Add, 0.1, 0.2),
        (OperationSymbol::Multiply, 1e6, 1e6),
        (OperationSymbol::Divide, -1.0, 0.0),
    ] {
        let result = evaluate(op, a, b);
        println!("{} {} {} = {}", a, op, b, result);
    }

    Ok(())
}
