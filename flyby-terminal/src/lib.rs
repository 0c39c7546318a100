/// Terminal front end: crossterm events drive the camera, the ASCII
/// rasterizer draws the scene
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use flyby_core::{Camera, FlybyOptions, Matrix4, Mesh, Vector3};
use log::{debug, info, warn};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod input;
pub mod renderer;

pub use input::{KeyMapper, KeyOutcome};
pub use renderer::AsciiRenderer;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 0.5;

/// Where the model starts before it begins drifting
const MODEL_START: Vector3 = Vector3::new(0.0, 2.0, 0.0);

/// Aspect ratio of a terminal of `width` x `height` cells
pub fn terminal_aspect(width: u16, height: u16) -> f32 {
    width as f32 * CELL_ASPECT / height.max(1) as f32
}

/// Main application struct for the terminal flyby
pub struct TerminalApp {
    mesh: Mesh,
    model: Matrix4,
    /// Model speed along +Z in units per second
    drift: f32,
    camera: Camera,
    renderer: AsciiRenderer,
    keys: KeyMapper,
    running: bool,
    frame_time: Duration,
    last_update: Instant,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, options: &FlybyOptions, drift: f32, fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let camera = Camera::from_options(&options.camera, terminal_aspect(width, height))
            .map_err(io::Error::other)?;

        info!(
            "starting flyby: {}x{} cells, eye at {:?}, {:?} basis, {:?} speeds",
            width,
            height,
            camera.eye(),
            camera.basis_refresh,
            camera.time_step
        );

        let now = Instant::now();
        Ok(Self {
            mesh,
            model: Matrix4::translation(MODEL_START),
            drift,
            camera,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            keys: KeyMapper::default(),
            running: true,
            frame_time: Duration::from_secs(1) / fps.max(1),
            last_update: now,
            last_fps_sample: now,
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;

        // Key releases are only reported with the keyboard enhancement protocol
        let releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if !releases {
            warn!("terminal does not report key releases; keys act for one frame per press");
        }
        self.keys = KeyMapper::new(releases);

        let result = enter_screen(&mut stdout(), releases).and_then(|()| self.main_loop());
        let restored = restore_terminal(&mut stdout(), releases);

        info!("flyby stopped, eye at {:?}", self.camera.eye());
        result.and(restored)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.last_update = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            // Drain every pending event before sampling input
            while event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?);
            }
            if !self.running {
                break;
            }

            self.update();
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_fps_sample).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if self.keys.handle(&key) == KeyOutcome::Quit {
                    self.running = false;
                }
            }
            Event::Resize(width, height) => self.resize(width, height),
            Event::FocusLost => self.keys.release_all(),
            _ => {}
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        debug!("terminal resized to {width}x{height}");
        self.renderer.resize(width as usize, height as usize);
        if let Err(e) = self.camera.set_aspect(terminal_aspect(width, height)) {
            warn!("keeping previous projection after resize: {e}");
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta_time = (now - self.last_update).as_secs_f32();
        self.last_update = now;

        let input = self.keys.snapshot();
        self.camera.update(&input, delta_time);
        self.model.translate(Vector3::new(0.0, 0.0, delta_time * self.drift));
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer
            .render_mesh(&self.mesh, &self.model, &self.camera.view_projection_matrix());

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let eye = self.camera.eye();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Flyby | FPS: {:.1} | eye ({:.2}, {:.2}, {:.2}) | WASD move  F/R up/down  arrows pitch/yaw  Q/E roll  Esc quit",
                self.fps, eye.x, eye.y, eye.z
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn enter_screen<W: Write>(out: &mut W, releases: bool) -> io::Result<()> {
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
    if releases {
        execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    Ok(())
}

/// Undo `enter_screen` and raw mode. Every step runs even after a failure;
/// the first error is returned.
fn restore_terminal<W: Write>(out: &mut W, releases: bool) -> io::Result<()> {
    let popped = if releases {
        execute!(out, PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let screen = execute!(out, terminal::LeaveAlternateScreen, cursor::Show);
    let raw = terminal::disable_raw_mode();
    popped.and(screen).and(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_aspect() {
        assert!((terminal_aspect(80, 40) - 1.0).abs() < 1e-6);
        assert!((terminal_aspect(120, 30) - 2.0).abs() < 1e-6);
        // A zero-height terminal still yields a finite aspect
        assert!(terminal_aspect(80, 0).is_finite());
    }

    /// Writer whose every write fails, counting the attempts
    struct BrokenPipe {
        attempts: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_runs_every_step_after_a_failure() {
        let mut out = BrokenPipe { attempts: 0 };
        assert!(restore_terminal(&mut out, true).is_err());
        // The failed pop does not stop the alternate screen from being left
        assert!(out.attempts >= 2, "{}", out.attempts);
    }

    #[test]
    fn test_restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"), "{text:?}");
        assert!(text.contains("\x1b[?25h"), "{text:?}");
    }
}
