use notify_rust::Notification;

const YELLOW: &str = "\x1b[93m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const APP_NAME: &str = "Panorama Stitcher";

/// Yellow line for routine events.
pub fn status(message: &str) {
    println!("{YELLOW}{message}{RESET}");
}

/// Cyan line marking the end of an interactive stage.
pub fn finished(message: &str) {
    println!("{CYAN}{message}{RESET}");
}

/// Green line for work in progress.
pub fn progress(message: &str) {
    println!("{GREEN}{message}{RESET}");
}

/// Green line plus a desktop notification.
pub fn notification(message: &str) {
    println!("{GREEN}{message}{RESET}");
    notify(message);
}

/// Red line plus a desktop notification.
pub fn error(message: &str) {
    println!("{RED}{message}{RESET}");
    notify(message);
}

// Toast delivery is best effort; the console line is the durable channel.
fn notify(message: &str) {
    Notification::new()
        .summary(APP_NAME)
        .body(message)
        .show()
        .ok();
}
