use std::process;

use tokio::{
    runtime::Runtime,
    sync::mpsc,
};

use remtica::{
    habitica::HabiticaRemote,
    host::HostEventServer,
    persistence,
    session::{
        sync::SyncEngine,
        worker::Worker,
    },
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
};

fn main() {
    let settings = match SettingsData::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            process::exit(1);
        }
    };

    println!("remtica {}", env!("CARGO_PKG_VERSION"));
    println!("Settings file: {}", persistence::get_data_file_path(SETTINGS_FILE).display());

    let credentials = match settings.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Set habitica_user_id and habitica_api_key in the settings file.");
            process::exit(1);
        }
    };

    let remote = match HabiticaRemote::new(settings.api_url.clone(), credentials) {
        Ok(remote) => remote,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {}", e);
            process::exit(1);
        }
    };

    rt.block_on(async {
        // The session still starts when Habitica is unreachable; pending
        // points just wait for the first successful sync.
        let startup_stats = match remote.fetch_user().await {
            Ok(user) => {
                println!(
                    "[SYNC] Connected to Habitica as {} (lvl {}, HP {:.0}/{:.0})",
                    user.profile.name, user.stats.lvl, user.stats.hp, user.stats.max_health
                );
                Some(user.stats)
            }
            Err(e) => {
                eprintln!("[SYNC] Could not reach Habitica yet: {}", e);
                None
            }
        };

        let (worker_tx, worker_rx) = mpsc::channel(64);

        let server = HostEventServer::new(settings.listen_addr.clone(), worker_tx);
        tokio::spawn(async move {
            if let Err(e) = server.run().await {
                eprintln!("[WS] Host event server stopped: {:?}", e);
            }
        });

        let mut engine = SyncEngine::new(remote);
        if let Some(stats) = startup_stats {
            engine.set_cached_stats(stats);
        }

        let worker = Worker::new(
            worker_rx,
            engine,
            settings.point_values(),
            settings.sync_frequency_mins,
            settings.push_mode,
        );
        worker.run().await;
    });
}
