use std::{
    io::Read,
    process::{Child, ExitStatus},
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::{Duration, Instant},
};

use crate::{
    config::defaults,
    misc::log::targets::{self},
    types::err::SolverError,
};

/// The exit status and captured output streams of a finished process.
pub(super) struct Captured {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// An output stream of the child.
enum Stream {
    Stdout,
    Stderr,
}

/// Waits for `child` to exit and for both of its output streams to close, for at most `timeout` if given.
///
/// Both output streams are drained on helper threads, so a chatty child never blocks on a full pipe.
/// A stream stays open while any process holds it, so a child which leaves a background process behind has not finished.
///
/// On timeout the child is killed and reaped, and whatever it wrote is discarded.
/// A helper thread still blocked on a stream ends when the last holder of the stream exits, and sends to no one.
pub(super) fn wait_with_output(
    mut child: Child,
    timeout: Option<Duration>,
) -> Result<Captured, SolverError> {
    let (sender, receiver) = mpsc::channel();
    let mut open_streams = 0;
    if let Some(pipe) = child.stdout.take() {
        drain(pipe, Stream::Stdout, sender.clone());
        open_streams += 1;
    }
    if let Some(pipe) = child.stderr.take() {
        drain(pipe, Stream::Stderr, sender.clone());
        open_streams += 1;
    }
    drop(sender);

    let deadline = timeout.and_then(|limit| Instant::now().checked_add(limit).map(|d| (limit, d)));

    let status = match deadline {
        None => child
            .wait()
            .map_err(SolverError::io("wait for the solver"))?,

        Some((limit, deadline)) => loop {
            if let Some(status) = child
                .try_wait()
                .map_err(SolverError::io("wait for the solver"))?
            {
                break status;
            }

            let now = Instant::now();
            if now >= deadline {
                log::warn!(target: targets::INVOKE, "Solver exceeded {limit:?}, killing pid {}", child.id());
                let _ = child.kill();
                let _ = child.wait();
                return Err(SolverError::Timeout(limit));
            }

            thread::sleep(defaults::POLL_INTERVAL.min(deadline - now));
        },
    };

    let mut captured = Captured {
        status,
        stdout: String::new(),
        stderr: String::new(),
    };

    for _ in 0..open_streams {
        let received = match deadline {
            None => receiver.recv().ok(),

            Some((limit, deadline)) => {
                match receiver.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(message) => Some(message),

                    Err(RecvTimeoutError::Timeout) => {
                        log::warn!(target: targets::INVOKE, "Solver output still open after {limit:?}");
                        return Err(SolverError::Timeout(limit));
                    }

                    Err(RecvTimeoutError::Disconnected) => None,
                }
            }
        };

        // A helper thread only disconnects without sending if it panicked.
        let Some((stream, bytes)) = received else {
            break;
        };

        let text = String::from_utf8_lossy(&bytes).into_owned();
        match stream {
            Stream::Stdout => captured.stdout = text,
            Stream::Stderr => captured.stderr = text,
        }
    }

    Ok(captured)
}

fn drain<R: Read + Send + 'static>(mut pipe: R, stream: Stream, sender: Sender<(Stream, Vec<u8>)>) {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = pipe.read_to_end(&mut buffer);
        let _ = sender.send((stream, buffer));
    });
}
