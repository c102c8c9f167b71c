use console::style;
use slide_action::{DrawCommand, DrawLayer, GestureState};

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    println!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn note(message: impl AsRef<str>) {
    println!("{}: {}", style("note").blue().bold(), message.as_ref());
}

pub fn step(message: impl AsRef<str>) {
    println!("    {}", message.as_ref());
}

pub fn state(state: GestureState) -> String {
    match state {
        GestureState::Normal => "normal".to_string(),
        GestureState::Dragging(side) => format!("dragging {side}"),
        GestureState::Completed(side) => format!("completed {side}"),
    }
}

pub fn draw_command(command: &DrawCommand<'_>) {
    let layer = match command.layer {
        DrawLayer::Background => "background".to_string(),
        DrawLayer::Caption(kind) => format!("caption {kind:?}").to_lowercase(),
        DrawLayer::Slider(side) => format!("{side} slider"),
    };
    let bounds = command.bounds;
    step(format!(
        "{layer:<16} [{}, {}, {}, {}] alpha {:>3}{}",
        bounds.left.0,
        bounds.top.0,
        bounds.right.0,
        bounds.bottom.0,
        command.alpha,
        if command.pressed { " pressed" } else { "" }
    ));
}
