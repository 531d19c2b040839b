use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use physics_demos::{Demo, DemoConfig, DemoKind, Drawable, Rgb};

struct MainState {
    demo: Box<dyn Demo>,
}

impl MainState {
    fn new(_ctx: &mut Context, kind: DemoKind, config: DemoConfig) -> GameResult<MainState> {
        let demo = kind
            .build(config)
            .map_err(|e| GameError::CustomError(e.to_string()))?;
        Ok(MainState { demo })
    }
}

fn to_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_unit();
    Color::new(r, g, b, 1.0)
}

fn draw_shape(ctx: &mut Context, canvas: &mut Canvas, shape: &Drawable) -> GameResult {
    match *shape {
        Drawable::Circle {
            center,
            radius,
            color,
            angle,
        } => {
            let center = GVec2::from(center);
            let circle_mesh = Mesh::new_circle(
                ctx,
                DrawMode::fill(),
                GVec2::new(0.0, 0.0),
                radius,
                0.1,
                to_color(color),
            )?;
            canvas.draw(&circle_mesh, DrawParam::new().dest(center));

            if let Some(angle) = angle {
                let rim = center + GVec2::new(angle.cos(), angle.sin()) * radius;
                let marker = Mesh::new_line(ctx, &[center, rim], 1.0, to_color(Rgb::MARKER))?;
                canvas.draw(&marker, DrawParam::new());
            }
        }
        Drawable::Line { a, b, width, color } => {
            // Degenerate lines cannot be tessellated.
            if a == b || width <= 0.0 {
                return Ok(());
            }
            let line_mesh = Mesh::new_line(
                ctx,
                &[GVec2::from(a), GVec2::from(b)],
                width,
                to_color(color),
            )?;
            canvas.draw(&line_mesh, DrawParam::new());
        }
    }
    Ok(())
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        // One world step per loop tick, at the scene's own rate.
        let fps = self.demo.config().fps;
        while ctx.time.check_update_time(fps) {
            self.demo.tick();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let background = to_color(self.demo.config().background);
        let mut canvas = graphics::Canvas::from_frame(ctx, background);

        for shape in self.demo.drawables() {
            draw_shape(ctx, &mut canvas, &shape)?;
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        }
        Ok(())
    }
}

pub fn run_visual(kind: DemoKind, config: DemoConfig) -> GameResult {
    let cb = ggez::ContextBuilder::new("physics_examples", "physics_demos")
        .window_setup(WindowSetup::default().title(&config.title))
        .window_mode(WindowMode::default().dimensions(config.width, config.height));

    let (mut ctx, event_loop) = cb.build()?;
    let state = MainState::new(&mut ctx, kind, config)?;
    event::run(ctx, event_loop, state)
}
