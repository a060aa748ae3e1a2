use clap::Parser;
use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

use flight_core::{
    ControlKey, FlightConfig, FlightFrame, ParticleVertex, TrailVertex, TRAIL_MAX_POINTS,
};

/// Fly a scripted route through the flight core and log what the renderer would see.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Seed for particle jitter
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Fixed frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Measure frame deltas from the wall clock instead of using --dt
    #[arg(long)]
    wall_clock: bool,

    /// Hold boost for the whole flight
    #[arg(long)]
    boost: bool,

    /// Trail capacity
    #[arg(long, default_value_t = TRAIL_MAX_POINTS)]
    trail_points: usize,
}

// Virtual viewport the scripted pointer moves in.
const VIEW_W: f32 = 1280.0;
const VIEW_H: f32 = 720.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Cruise,
    Boost,
    Strafe,
}

fn phase_for(frame: u32, total: u32) -> Phase {
    let third = (total / 3).max(1);
    match frame / third {
        0 => Phase::Cruise,
        1 => Phase::Boost,
        _ => Phase::Strafe,
    }
}

fn apply_script(flight: &mut FlightFrame, frame: u32, total: u32, always_boost: bool) {
    let t = frame as f32 / total.max(1) as f32;
    let angle = t * std::f32::consts::TAU * 2.0;
    let px = VIEW_W * (0.5 + 0.35 * angle.cos());
    let py = VIEW_H * (0.5 + 0.35 * angle.sin());
    flight.input_mut().on_pointer_move(px, py, VIEW_W, VIEW_H);
    flight.cursor_mut().on_pointer_move(px, py, VIEW_W, VIEW_H);

    let input = flight.input_mut();
    input.on_key_down(ControlKey::Forward);
    let phase = phase_for(frame, total);
    if always_boost || phase == Phase::Boost {
        input.on_key_down(ControlKey::Boost);
    } else {
        input.on_key_up(ControlKey::Boost);
    }
    if phase == Phase::Strafe {
        input.on_key_code("KeyD", true);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = FlightConfig {
        trail: flight_core::TrailParams {
            max_points: args.trail_points,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut flight = FlightFrame::new(config)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    log::info!(
        "flight-native starting: {} frames, seed {}, dt {}",
        args.frames,
        args.seed,
        if args.wall_clock {
            "wall clock".to_string()
        } else {
            format!("{:.4}s fixed", args.dt)
        }
    );

    // Renderer-side buffers, reused every frame.
    let mut trail_vertices: Vec<TrailVertex> = Vec::with_capacity(args.trail_points);
    let mut particle_vertices: Vec<ParticleVertex> =
        Vec::with_capacity(flight.particles().params().particle_count);

    let start = Instant::now();
    let mut last = start;
    let mut travelled = 0.0f32;
    let mut peak_speed = 0.0f32;
    let mut prev_position = Vec3::ZERO;

    for frame in 0..args.frames {
        apply_script(&mut flight, frame, args.frames, args.boost);

        let dt = if args.wall_clock {
            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;
            dt
        } else {
            args.dt
        };
        let report = flight.frame(dt, &mut rng);

        flight.trail().vertices_into(&mut trail_vertices);
        flight.particles().vertices_into(&mut particle_vertices);

        travelled += report.position.distance(prev_position);
        prev_position = report.position;
        peak_speed = peak_speed.max(report.kinematics.velocity.length());

        if frame % 60 == 0 {
            log::info!(
                "[frame {frame:>5}] pos {:>7.2} {:>7.2} {:>7.2} speed {:.3} glow {:.1} trail {} particles {} (+{})",
                report.position.x,
                report.position.y,
                report.position.z,
                report.kinematics.velocity.length(),
                report.glow,
                trail_vertices.len(),
                particle_vertices.len(),
                report.spawned,
            );
        }
        log::trace!(
            "[frame {frame}] heading {} orientation {:?}",
            report.kinematics.direction,
            report.kinematics.orientation
        );
    }

    log::info!(
        "done in {:.1} ms: travelled {:.2}, peak speed {:.3}, trail {}, particles {}",
        start.elapsed().as_secs_f64() * 1000.0,
        travelled,
        peak_speed,
        flight.trail().len(),
        flight.particles().len()
    );
    Ok(())
}
