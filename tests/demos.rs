use stacko::{config::Settings, run_file};
use walkdir::WalkDir;

#[test]
fn demo_programs_run_cleanly() {
    let settings = Settings { close_after_frames: Some(5),
                              seed: Some(1),
                              ..Settings::default() };
    let mut count = 0;

    for entry in
        WalkDir::new("demos").sort_by_file_name()
                             .into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "stko"))
    {
        let path = entry.path().to_str().expect("demo path is UTF-8").to_string();
        count += 1;

        match run_file(&path, &settings) {
            Ok(0) => {},
            Ok(code) => panic!("Demo {path} exited with {code}"),
            Err(e) => panic!("Demo {path} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[cfg(not(feature = "window"))]
#[test]
fn headless_window_closes_without_a_frame_limit() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("loop.stko");
    std::fs::write(&path,
                   "createWindow windowRunning while { windowUpdate windowRunning } closeWindow")
        .expect("can write program file");
    let path = path.to_str().expect("temp path is UTF-8");

    assert!(matches!(run_file(path, &Settings::default()), Ok(0)));
}
