//! Yard Runner headless driver
//!
//! Runs a scripted session against the simulation core and logs the result.
//! The web build drives the same core through `Host` from JavaScript.
//!
//! Usage: `yard-runner [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Yard Runner (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                log::error!("Invalid seed {:?}: {}", arg, e);
                std::process::exit(2);
            }
        },
        None => yard_runner::consts::DEFAULT_SEED,
    };

    let mut host = yard_runner::Host::new();
    match args.next() {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| {
                    host.init_with_tuning(seed, &json)
                        .map_err(|e| e.to_string())
                });
            if let Err(e) = loaded {
                log::error!("Failed to load tuning from {}: {}", path, e);
                std::process::exit(2);
            }
            log::info!("Loaded tuning from {}", path);
        }
        None => host.init_with_seed(seed),
    }
    log::info!("Game initialized with seed: {}", seed);

    demo::run(&mut host);

    match host.snapshot_json() {
        Ok(Some(json)) => println!("{json}"),
        Ok(None) => log::warn!("No simulation to report"),
        Err(e) => log::error!("Snapshot failed: {}", e),
    }
    host.destroy();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `host::wasm_start`, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use yard_runner::Host;
    use yard_runner::sim::SimEvent;

    const KEY_FORWARD: i32 = 'w' as i32;
    const KEY_RIGHT: i32 = 'd' as i32;
    const KEY_INTERACT: i32 = 'e' as i32;
    const MAX_SETTLE_TICKS: u32 = 1000;

    /// Walk to the vehicle, take it for a spin, get out and open fire
    pub fn run(host: &mut Host) {
        // Turn to face the vehicle (+X) and walk over
        host.set_camera_delta(-(std::f32::consts::FRAC_PI_2 / 0.005), 0.0, 0.0);
        host.set_key(KEY_FORWARD, true);
        run_ticks(host, 35);
        host.set_key(KEY_FORWARD, false);

        tap(host, KEY_INTERACT);
        log::info!("In vehicle: {}", host.in_vehicle());

        // Drive diagonally
        host.set_key(KEY_FORWARD, true);
        host.set_key(KEY_RIGHT, true);
        run_ticks(host, 20);
        host.set_key(KEY_FORWARD, false);
        host.set_key(KEY_RIGHT, false);

        // Firing from the vehicle does nothing
        host.trigger_shoot();
        log::info!("Bullets while driving: {}", host.bullet_count());

        tap(host, KEY_INTERACT);
        log::info!(
            "Out of vehicle at ({:.2}, {:.2}), vehicle at ({:.2}, {:.2})",
            host.player_x(),
            host.player_z(),
            host.vehicle_x(),
            host.vehicle_z()
        );

        // Sweep the camera and fire a volley each step
        for _ in 0..16 {
            host.set_camera_delta(80.0, 0.0, 0.0);
            for _ in 0..3 {
                host.trigger_shoot();
            }
            run_ticks(host, 5);
        }

        // Let the volley resolve (bullets may never expire with custom tuning)
        let mut settle = 0;
        while host.bullet_count() > 0 && settle < MAX_SETTLE_TICKS {
            run_ticks(host, 1);
            settle += 1;
        }
        log::info!(
            "Session over after {} ticks: score {}, {} enemies",
            host.tick_count(),
            host.score(),
            host.enemy_count()
        );
    }

    fn tap(host: &mut Host, key: i32) {
        host.set_key(key, true);
        run_ticks(host, 1);
        host.set_key(key, false);
    }

    fn run_ticks(host: &mut Host, n: usize) {
        for _ in 0..n {
            host.tick();
            for event in host.take_events() {
                match event {
                    SimEvent::EnemyKilled { position } => {
                        log::info!("Enemy down at {:?} (score {})", position, host.score());
                    }
                    SimEvent::EnteredVehicle => log::info!("Entered vehicle"),
                    SimEvent::ExitedVehicle => log::info!("Exited vehicle"),
                    other => log::debug!("{:?}", other),
                }
            }
        }
    }
}
