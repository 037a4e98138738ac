use std::time::{Duration, Instant};

use eframe::egui::{self, Sense, Vec2, ViewportCommand};
use pendulum_wave::{ConfigError, PendulumWave, WaveConfig};
use tracing::{debug, info};

use crate::{
    input::{actions_from_events, Action},
    paint::{paint_status, paint_wave, BACKGROUND},
};

pub struct PendulumWaveApp {
    wave: PendulumWave,
    bob_radius: f32,
    repaint_interval: Duration,

    last_frame: Option<Instant>,
    canvas_size: Option<Vec2>,
}

impl PendulumWaveApp {
    pub fn new(config: &WaveConfig) -> Result<Self, ConfigError> {
        Ok(PendulumWaveApp {
            wave: PendulumWave::new(config)?,
            bob_radius: config.bob_radius,
            repaint_interval: Duration::from_secs_f32(1.0 / config.frame_rate_limit as f32),
            last_frame: None,
            canvas_size: None,
        })
    }

    pub fn update(&mut self, ctx: &egui::Context) {
        for action in ctx.input(|i| actions_from_events(&i.events)) {
            match action {
                Action::Control(control) => self.wave.apply(control),
                Action::Quit => {
                    info!("quit requested");
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
            }
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            info!("window closed");
        }

        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(0.0, |last| (now - last).as_secs_f32());
        self.last_frame = Some(now);
        self.wave.step(dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND))
            .show(ctx, |ui| {
                // The canvas covers the whole window, one point per pixel of wave space.
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());

                let size = response.rect.size();
                if self.canvas_size != Some(size) {
                    debug!(width = size.x, height = size.y, "canvas resized");
                    self.canvas_size = Some(size);
                }

                paint_wave(&painter, response.rect.min, &self.wave, self.bob_radius);
                paint_status(&painter, response.rect, &self.wave);
            });

        ctx.request_repaint_after(self.repaint_interval);
    }
}
