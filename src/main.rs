use std::{
    error::Error,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use log::{debug, info, warn};
use minifb::{Key, Scale, Window, WindowOptions};
use structopt::StructOpt;

use sphere_raytracer::{
    film::Film,
    math::Color,
    parsing::{load_scene, SceneData},
    render,
    renderer::render_with_progress,
    RenderSettings, Scene,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "sphere_raytracer", about = "Recursive ray tracer for scenes of spheres")]
struct Opt {
    /// Scene description in JSON. The built-in scene is used when omitted.
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,

    #[structopt(long, default_value = "800")]
    width: usize,

    #[structopt(long, default_value = "800")]
    height: usize,

    /// Maximum number of mirror bounces per primary ray.
    #[structopt(long, default_value = "3")]
    depth: u32,

    /// Render threads, defaults to the number of logical cpus.
    #[structopt(long)]
    threads: Option<usize>,

    /// Frame rate cap for the interactive window.
    #[structopt(long, default_value = "30")]
    fps: u64,

    /// Render a single frame to this png file instead of opening a window.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Print the loaded scene as JSON and exit.
    #[structopt(long)]
    print_scene: bool,
}

fn at_least_one(value: usize, name: &str) -> usize {
    if value == 0 {
        warn!("{} of 0 is not usable, using 1", name);
        1
    } else {
        value
    }
}

fn render_to_file(
    scene: &Scene,
    settings: &RenderSettings,
    width: usize,
    height: usize,
    filename: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut film = Film::new(width, height, Color::BLACK);
    let start = Instant::now();
    render_with_progress(scene, settings, &mut film);
    info!("rendered {}x{} in {:?}", width, height, start.elapsed());
    film.write_png(filename)?;
    info!("wrote {}", filename.display());
    Ok(())
}

fn run_window(
    scene: &Scene,
    settings: &RenderSettings,
    width: usize,
    height: usize,
    fps: u64,
) -> Result<(), Box<dyn Error>> {
    let mut window = Window::new(
        "Sphere raytracer",
        width,
        height,
        WindowOptions {
            resize: true,
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(Some(Duration::from_micros(1_000_000 / fps)));

    let mut film = Film::new(width, height, Color::BLACK);
    let mut window_pixels: Vec<u32> = Vec::with_capacity(width * height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (width, height) = window.get_size();
        if width == 0 || height == 0 {
            // minimized
            window.update();
            continue;
        }
        if (width, height) != (film.width, film.height) {
            debug!("resized to {}x{}", width, height);
            film.resize(width, height, Color::BLACK);
        }

        let start = Instant::now();
        render(scene, settings, &mut film);
        debug!("frame {}x{} traced in {:?}", width, height, start.elapsed());

        film.pack_into(&mut window_pixels);
        window.update_with_buffer(&window_pixels, width, height)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(at_least_one(threads, "threads"))
        .build_global()?;

    let scene = match &opt.scene {
        Some(path) => load_scene(path)?,
        None => Scene::default(),
    };
    info!(
        "scene has {} spheres and {} lights",
        scene.spheres.len(),
        scene.lights.len()
    );

    if opt.print_scene {
        println!(
            "{}",
            serde_json::to_string_pretty(&SceneData::from(&scene))?
        );
        return Ok(());
    }

    let settings = RenderSettings {
        depth: opt.depth,
        ..RenderSettings::default()
    };
    let width = at_least_one(opt.width, "width");
    let height = at_least_one(opt.height, "height");

    match &opt.output {
        Some(filename) => render_to_file(&scene, &settings, width, height, filename),
        None => {
            let fps = at_least_one(opt.fps as usize, "fps") as u64;
            run_window(&scene, &settings, width, height, fps)
        }
    }
}
