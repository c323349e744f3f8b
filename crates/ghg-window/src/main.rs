// File: crates/ghg-window/src/main.rs
// Summary: Interactive window for both emissions charts: CPU render + RGBA blit via winit + softbuffer.
// Tab switches between the comparative and cumulative view; Escape or closing the window exits.

use anyhow::{Context, Result};
use ghg_core::render::render_to_rgba8;
use ghg_core::source::resolve_path;
use ghg_core::{
    AreaChart, AreaInteraction, AreaScene, Config, FileSource, LineChart, LineInteraction, LineScene, Pointer,
    RenderOptions, ViewData,
};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const DEFAULT_INPUT: &str = "data/OECD.ENV.EPI,DSD_AIR_GHG@DF_AIR_GHG,+.A.GHG._T.KG_CO2E_PS.csv";

/// One switchable view with its own pointer state.
enum View {
    Comparative(LineChart, LineInteraction),
    Cumulative(AreaChart, AreaInteraction),
}

impl View {
    fn title(&self) -> &'static str {
        match self {
            Self::Comparative(..) => "GHG emissions per person (Tab: next view)",
            Self::Cumulative(..) => "Cumulative emission index (Tab: next view)",
        }
    }

    fn size(&self) -> (i32, i32) {
        match self {
            Self::Comparative(chart, _) => chart.surface_size(),
            Self::Cumulative(chart, _) => chart.surface_size(),
        }
    }

    fn pointer_move(&mut self, pointer: Pointer) {
        match self {
            Self::Comparative(chart, state) => {
                state.pointer_move(chart, pointer);
            }
            Self::Cumulative(chart, state) => {
                state.pointer_move(chart, pointer);
            }
        }
    }

    fn pointer_leave(&mut self) {
        match self {
            Self::Comparative(_, state) => state.pointer_leave(),
            Self::Cumulative(_, state) => state.pointer_leave(),
        }
    }

    fn render(&self, opts: &RenderOptions) -> ghg_core::error::RenderResult<ghg_core::render::RgbaFrame> {
        match self {
            Self::Comparative(chart, state) => render_to_rgba8(&LineScene::with_interaction(chart, state), opts),
            Self::Cumulative(chart, state) => render_to_rgba8(&AreaScene::with_interaction(chart, state), opts),
        }
    }
}

fn build_views(config: &Config, input: &Path) -> Result<Vec<View>> {
    let source = FileSource::new(input);
    let loaded = match ghg_core::load(&source, &config.pipeline) {
        Ok(loaded) => loaded,
        Err(e) => anyhow::bail!(config.messages.load_failure(e.resource())),
    };

    let mut views = Vec::new();
    match &loaded.series {
        ViewData::Ready(set) => {
            if let Some(chart) = LineChart::new(set, &config.line) {
                let state = LineInteraction::new(&chart);
                views.push(View::Comparative(chart, state));
            }
        }
        ViewData::NoData => warn!("{}", config.messages.no_data_comparative),
    }
    match &loaded.records {
        ViewData::Ready(records) => {
            if let Some(chart) = AreaChart::new(records, &config.pipeline.area_entities, &config.area) {
                views.push(View::Cumulative(chart, AreaInteraction::new()));
            }
        }
        ViewData::NoData => warn!("{}", config.messages.no_data_cumulative),
    }
    Ok(views)
}

fn main() -> Result<()> {
    let _ = ghg_core::telemetry::init_default_tracing();

    let mut input = DEFAULT_INPUT.to_string();
    let mut config_path: Option<PathBuf> = None;
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => config_path = Some(it.next().context("--config needs a file path")?.into()),
            _ => input = arg,
        }
    }
    let config = match &config_path {
        Some(path) => Config::from_path(path).with_context(|| format!("loading config '{}'", path.display()))?,
        None => Config::default(),
    };
    let (path, _) = resolve_path(&input);
    info!(input = %path.display(), "using input file");
    let mut views = build_views(&config, &path)?;
    if views.is_empty() {
        anyhow::bail!("no data available for either view");
    }
    info!(views = views.len(), "charts ready");

    let event_loop = EventLoop::new();
    let (w0, h0) = views[0].size();
    let window = WindowBuilder::new()
        .with_title(views[0].title())
        .with_inner_size(PhysicalSize::new(w0 as u32, h0 as u32))
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.context("softbuffer context")?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.context("softbuffer surface")?;

    let opts = config.render_options();
    let background = {
        let c = opts.theme.background;
        (u32::from(c.r()) << 16) | (u32::from(c.g()) << 8) | u32::from(c.b())
    };
    let mut active = 0usize;
    let mut size = window.inner_size();

    let mut draw = move |view: &View, size: PhysicalSize<u32>| -> Result<()> {
        let (w, h) = (
            NonZeroU32::new(size.width.max(1)).context("zero width")?,
            NonZeroU32::new(size.height.max(1)).context("zero height")?,
        );
        surface.resize(w, h).context("resizing surface")?;
        let rgba = view.render(&opts)?;
        let mut frame = surface.buffer_mut().context("acquiring frame")?;
        frame.fill(background);

        // softbuffer pixels are 0RGB; copy the overlapping region row by row
        let (fw, fh) = (size.width as usize, size.height as usize);
        let (cw, ch) = (rgba.width as usize, rgba.height as usize);
        for y in 0..fh.min(ch) {
            let src = &rgba.pixels[y * rgba.stride..y * rgba.stride + cw * 4];
            for (x, px) in src.chunks_exact(4).take(fw).enumerate() {
                frame[y * fw + x] = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
            }
        }
        frame.present().context("presenting frame")?;
        Ok(())
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    views[active].pointer_move(Pointer::new(position.x, position.y));
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    views[active].pointer_leave();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                    VirtualKeyCode::Tab => {
                        views[active].pointer_leave();
                        active = (active + 1) % views.len();
                        let (w, h) = views[active].size();
                        window.set_title(views[active].title());
                        window.set_inner_size(PhysicalSize::new(w as u32, h as u32));
                        window.request_redraw();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&views[active], size) {
                    error!(error = %e, "failed to draw frame");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
