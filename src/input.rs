//! The input thread: reading keys and turning them into steering changes
use crate::command::Command;
use crate::consts;
use crate::steering::Steering;
use crossterm::event::{poll, read, KeyCode, KeyEvent};
use std::io::{self, ErrorKind, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// A source of key presses
pub(crate) trait KeySource {
    /// Wait for the next key press.  Returns `None` at end of input.
    ///
    /// Sources that can wait with a timeout also return `None` once
    /// `steering` has been told to stop, so that the input thread does not
    /// outlive the stepping thread.
    fn next_key(&mut self, steering: &Steering) -> io::Result<Option<KeyEvent>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self, steering: &Steering) -> io::Result<Option<KeyEvent>> {
        (**self).next_key(steering)
    }
}

/// Key presses from the terminal, which must be in raw mode
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TerminalKeys {
    poll_period: Duration,
}

impl Default for TerminalKeys {
    fn default() -> TerminalKeys {
        TerminalKeys {
            poll_period: consts::INPUT_POLL_PERIOD,
        }
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self, steering: &Steering) -> io::Result<Option<KeyEvent>> {
        while !steering.stopping() {
            if poll(self.poll_period)? {
                if let Some(ev) = read()?.as_key_press_event() {
                    return Ok(Some(ev));
                }
            }
        }
        Ok(None)
    }
}

/// Key presses decoded one byte at a time from a reader
#[derive(Debug)]
pub(crate) struct ByteKeys<R> {
    inner: R,
}

impl<R> ByteKeys<R> {
    pub(crate) fn new(inner: R) -> Self {
        ByteKeys { inner }
    }
}

impl<R: Read> ByteKeys<R> {
    /// Block until the next byte arrives.  Returns `None` at end of input.
    pub(crate) fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    let [b] = buf;
                    let code = match b {
                        b'\n' | b'\r' => KeyCode::Enter,
                        _ => KeyCode::Char(char::from(b)),
                    };
                    return Ok(Some(code.into()));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => (),
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> KeySource for ByteKeys<R> {
    fn next_key(&mut self, _steering: &Steering) -> io::Result<Option<KeyEvent>> {
        self.read_key()
    }
}

/// Key presses decoded from a reader on a background thread, for when
/// standard input is not a terminal.
///
/// A blocking read cannot be interrupted, so the reading happens on a
/// detached thread and [`KeySource::next_key`] waits on a channel instead.
/// This lets the input thread give up once the game stops even if no more
/// bytes ever arrive.
#[derive(Debug)]
pub(crate) struct PipedKeys {
    receiver: Receiver<io::Result<KeyEvent>>,
    poll_period: Duration,
}

impl PipedKeys {
    pub(crate) fn spawn<R: Read + Send + 'static>(inner: R) -> PipedKeys {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut keys = ByteKeys::new(inner);
            loop {
                let r = match keys.read_key() {
                    Ok(Some(ev)) => Ok(ev),
                    Ok(None) => break,
                    Err(e) => Err(e),
                };
                let failed = r.is_err();
                if sender.send(r).is_err() || failed {
                    break;
                }
            }
        });
        PipedKeys {
            receiver,
            poll_period: consts::INPUT_POLL_PERIOD,
        }
    }
}

impl KeySource for PipedKeys {
    fn next_key(&mut self, steering: &Steering) -> io::Result<Option<KeyEvent>> {
        while !steering.stopping() {
            match self.receiver.recv_timeout(self.poll_period) {
                Ok(r) => return r.map(Some),
                Err(RecvTimeoutError::Timeout) => (),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        Ok(None)
    }
}

/// Read keys from `keys` until told to stop, turning the snake or raising the
/// stop flag as requested.  Unrecognized keys are ignored, and running out of
/// input counts as a request to quit.
pub(crate) fn run_input<K: KeySource>(mut keys: K, steering: &Steering) -> io::Result<()> {
    while !steering.stopping() {
        let Some(ev) = keys.next_key(steering)? else {
            if !steering.stopping() {
                log::info!("End of input reached; quitting");
                steering.stop();
            }
            break;
        };
        match Command::from_key_event(ev) {
            Some(Command::Quit) => {
                log::info!("Quit requested");
                steering.stop();
            }
            Some(cmd) => {
                if let Some(direction) = cmd.direction() {
                    steering.turn(direction);
                }
            }
            None => log::trace!("Ignoring key {:?}", ev.code),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use std::collections::VecDeque;
    use std::io::Cursor;

    impl KeySource for VecDeque<KeyEvent> {
        fn next_key(&mut self, _steering: &Steering) -> io::Result<Option<KeyEvent>> {
            Ok(self.pop_front())
        }
    }

    /// A reader that blocks until its sender is dropped
    #[derive(Debug)]
    struct Stalled(Receiver<()>);

    impl Read for Stalled {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("keyboard on fire"))
        }
    }

    #[test]
    fn byte_keys() {
        let mut keys = ByteKeys::new(Cursor::new(b"w\nQ"));
        assert_eq!(keys.read_key().unwrap(), Some(KeyCode::Char('w').into()));
        assert_eq!(keys.read_key().unwrap(), Some(KeyCode::Enter.into()));
        assert_eq!(keys.read_key().unwrap(), Some(KeyCode::Char('Q').into()));
        assert_eq!(keys.read_key().unwrap(), None);
    }

    #[test]
    fn piped_keys() {
        let steering = Steering::new(Direction::Right);
        let mut keys = PipedKeys::spawn(Cursor::new(b"a\n"));
        assert_eq!(
            keys.next_key(&steering).unwrap(),
            Some(KeyCode::Char('a').into())
        );
        assert_eq!(keys.next_key(&steering).unwrap(), Some(KeyCode::Enter.into()));
        assert_eq!(keys.next_key(&steering).unwrap(), None);
    }

    #[test]
    fn piped_keys_give_up_when_stopped() {
        let (sender, receiver) = mpsc::channel();
        let steering = Steering::new(Direction::Right);
        let mut keys = PipedKeys::spawn(Stalled(receiver));
        steering.stop();
        assert_eq!(keys.next_key(&steering).unwrap(), None);
        drop(sender);
    }

    #[test]
    fn piped_read_error() {
        let steering = Steering::new(Direction::Right);
        let e = run_input(PipedKeys::spawn(Failing), &steering).unwrap_err();
        assert_eq!(e.to_string(), "keyboard on fire");
        assert!(!steering.stopping());
    }

    #[test]
    fn latest_direction_wins() {
        let steering = Steering::new(Direction::Right);
        run_input(ByteKeys::new(Cursor::new(b"w\nxa")), &steering).unwrap();
        assert_eq!(steering.direction(), Direction::Left);
        assert!(steering.stopping());
    }

    #[test]
    fn quit_stops_reading() {
        let steering = Steering::new(Direction::Right);
        let mut keys = VecDeque::from([
            KeyEvent::from(KeyCode::Char('s')),
            KeyEvent::from(KeyCode::Char('q')),
            KeyEvent::from(KeyCode::Char('w')),
        ]);
        run_input(&mut keys, &steering).unwrap();
        assert!(steering.stopping());
        assert_eq!(steering.direction(), Direction::Bottom);
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn already_stopped() {
        let steering = Steering::new(Direction::Right);
        steering.stop();
        let mut keys = VecDeque::from([KeyEvent::from(KeyCode::Char('a'))]);
        run_input(&mut keys, &steering).unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(steering.direction(), Direction::Right);
    }

    #[test]
    fn read_error() {
        let steering = Steering::new(Direction::Right);
        let e = run_input(ByteKeys::new(Failing), &steering).unwrap_err();
        assert_eq!(e.to_string(), "keyboard on fire");
        assert!(!steering.stopping());
    }
}
