use eframe::egui::{vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};
use pendulum_wave::{PendulumWave, Rgb8};

pub const BACKGROUND: Color32 = Color32::from_rgb(15, 15, 30);
const PIVOT_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
const STRING_COLOR: Color32 = Color32::from_rgb(70, 70, 90);
const STATUS_COLOR: Color32 = Color32::from_rgb(140, 140, 160);

const PIVOT_RADIUS: f32 = 10.0;
const STRING_WIDTH: f32 = 1.0;
const OUTLINE_WIDTH: f32 = 2.0;
const STATUS_MARGIN: f32 = 12.0;

fn color32(color: Rgb8) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

// Wave coordinates are pixels from the top-left corner of the canvas.
fn to_screen(origin: Pos2, point: glam::Vec2) -> Pos2 {
    origin + vec2(point.x, point.y)
}

pub fn paint_wave(painter: &Painter, origin: Pos2, wave: &PendulumWave, bob_radius: f32) {
    let pivot = to_screen(origin, wave.pivot());
    painter.circle_filled(pivot, PIVOT_RADIUS, PIVOT_COLOR);

    for pendulum in wave.pendulums() {
        let bob = to_screen(origin, pendulum.position);

        painter.line_segment([pivot, bob], Stroke::new(STRING_WIDTH, STRING_COLOR));
        painter.circle(
            bob,
            bob_radius,
            color32(pendulum.color),
            Stroke::new(OUTLINE_WIDTH, color32(pendulum.color.halved())),
        );
    }
}

pub fn status_line(wave: &PendulumWave) -> String {
    let clock = wave.clock();
    let paused = if clock.is_paused() { "  [paused]" } else { "" };

    format!(
        "t = {:.2}s  speed x{:.2}  realign in {:.1}s{}",
        clock.elapsed(),
        clock.scale(),
        wave.realignment_in(),
        paused
    )
}

pub fn paint_status(painter: &Painter, canvas: Rect, wave: &PendulumWave) {
    painter.text(
        canvas.left_bottom() + vec2(STATUS_MARGIN, -STATUS_MARGIN),
        Align2::LEFT_BOTTOM,
        status_line(wave),
        FontId::monospace(14.0),
        STATUS_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use pendulum_wave::{Control, WaveConfig};

    use super::*;

    #[test]
    fn test_status_line() {
        let mut wave = PendulumWave::new(&WaveConfig::default()).unwrap();
        assert_eq!(status_line(&wave), "t = 0.00s  speed x1.00  realign in 60.0s");

        wave.step(1.5);
        wave.apply(Control::SpeedUp);
        wave.apply(Control::TogglePause);
        assert_eq!(
            status_line(&wave),
            "t = 1.50s  speed x1.20  realign in 58.5s  [paused]"
        );
    }

    #[test]
    fn test_to_screen_offsets() {
        let origin = Pos2::new(4.0, 8.0);
        assert_eq!(
            to_screen(origin, glam::Vec2::new(900.0, 50.0)),
            Pos2::new(904.0, 58.0)
        );
    }
}
