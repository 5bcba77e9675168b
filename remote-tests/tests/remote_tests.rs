//! Integration Tests für die Fernbedienung
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Hardware

use std::cell::Cell;
use std::rc::Rc;

use remote_core::{
    Command, CommandMessage, CommandTransport, DisplayError, EffectCatalog, Frame, LedError,
    LinkGate, LinkState, LinkStatus, MESSAGE_LEN, PeerAddress, PushButton, Remote, RemoteError, SelectionDisplay, SendStatus,
    SmartLedWriter, TransportError, encode_set_brightness, encode_set_effect, status_color,
};
use rgb::RGB8;

const DEBOUNCE_MS: u64 = 20;

// ============================================================================
// Mock Hardware
// ============================================================================

/// Taster, dessen Pegel der Test von außen setzt
#[derive(Clone, Default)]
pub struct MockButton {
    pressed: Rc<Cell<bool>>,
}

impl MockButton {
    pub fn set(&self, pressed: bool) {
        self.pressed.set(pressed);
    }
}

impl PushButton for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed.get()
    }
}

#[derive(Default)]
pub struct MockTransport {
    pub sent: Vec<(PeerAddress, Frame)>,
    pub fail_next_send: bool,
}

impl MockTransport {
    fn last_message(&self) -> CommandMessage {
        let (_, frame) = self.sent.last().expect("nothing sent");
        CommandMessage::decode(frame).unwrap()
    }
}

impl CommandTransport for MockTransport {
    fn send(&mut self, peer: PeerAddress, frame: Frame) -> Result<(), TransportError> {
        if self.fail_next_send {
            self.fail_next_send = false;
            return Err(TransportError::QueueFull);
        }

        self.sent.push((peer, frame));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDisplay {
    pub shown: Option<(usize, usize, String)>,
    pub show_count: usize,
    pub fail_next_show: bool,
}

impl SelectionDisplay for MockDisplay {
    fn show(&mut self, index: usize, count: usize, name: &str) -> Result<(), DisplayError> {
        if self.fail_next_show {
            self.fail_next_show = false;
            return Err(DisplayError::WriteFailed);
        }

        self.shown = Some((index, count, name.to_string()));
        self.show_count += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockLedWriter {
    pub colors: Vec<RGB8>,
    pub fail_next_write: bool,
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.colors.push(color);
        Ok(())
    }
}

type TestRemote = Remote<MockButton, MockTransport, MockDisplay>;

fn remote_with_peer(peer: PeerAddress) -> (TestRemote, MockButton) {
    let button = MockButton::default();
    let remote = Remote::new(
        EffectCatalog::default(),
        peer,
        button.clone(),
        MockTransport::default(),
        MockDisplay::default(),
        DEBOUNCE_MS,
    );
    (remote, button)
}

fn remote() -> (TestRemote, MockButton) {
    remote_with_peer(PeerAddress::BROADCAST)
}

/// Simuliert einen vollständigen Tastendruck (drücken + loslassen)
fn press(remote: &mut TestRemote, button: &MockButton, now_ms: &mut u64) {
    button.set(true);
    let result = remote.poll(*now_ms);
    assert!(result.is_some(), "press at {now_ms} ms not detected");
    *now_ms += 50;

    button.set(false);
    assert!(remote.poll(*now_ms).is_none());
    *now_ms += 50;
}

// ============================================================================
// Tests: Start
// ============================================================================

#[test]
fn test_start_sends_effect_zero() {
    let (mut remote, _) = remote();

    let dispatch = remote.start().unwrap();

    assert_eq!(dispatch.effect, 0);
    assert_eq!(dispatch.name, Some("Solid White"));
    assert_eq!(remote.transport().sent.len(), 1);
    assert_eq!(remote.transport().last_message(), CommandMessage::set_effect(0));
    assert_eq!(
        remote.display().shown,
        Some((0, 7, "Solid White".to_string()))
    );
}

#[test]
fn test_start_resets_index_after_changes() {
    let (mut remote, _) = remote();
    remote.set_effect(4).unwrap();

    remote.start().unwrap();

    assert_eq!(remote.current_effect(), 0);
    assert_eq!(remote.transport().last_message().argument, 0);
}

// ============================================================================
// Tests: Tastendruck → Zustand → Nachricht
// ============================================================================

#[test]
fn test_press_advances_to_one() {
    let (mut remote, button) = remote();
    remote.start().unwrap();
    let mut now = 100;

    press(&mut remote, &button, &mut now);

    assert_eq!(remote.current_effect(), 1);
    let (_, frame) = remote.transport().sent.last().unwrap();
    assert_eq!(frame, &[6, 2, 1, 0, 0, 0]);
}

#[test]
fn test_seven_presses_wrap_to_zero() {
    let (mut remote, button) = remote();
    remote.start().unwrap();
    let mut now = 100;

    press(&mut remote, &button, &mut now);
    assert_eq!(remote.current_effect(), 1);

    for _ in 0..6 {
        press(&mut remote, &button, &mut now);
    }

    assert_eq!(remote.current_effect(), 0);
    // Start + 7 Tastendrücke
    assert_eq!(remote.transport().sent.len(), 8);
    assert_eq!(remote.transport().last_message(), CommandMessage::set_effect(0));
}

#[test]
fn test_press_from_last_effect_wraps() {
    let (mut remote, button) = remote();
    remote.set_effect(6).unwrap();
    let mut now = 100;

    press(&mut remote, &button, &mut now);

    assert_eq!(remote.current_effect(), 0);
    assert_eq!(remote.current_name(), Some("Solid White"));
}

#[test]
fn test_held_button_sends_once() {
    let (mut remote, button) = remote();
    remote.start().unwrap();

    button.set(true);
    assert!(remote.poll(100).is_some());
    for t in (110..1000).step_by(10) {
        assert!(remote.poll(t).is_none());
    }

    assert_eq!(remote.current_effect(), 1);
    assert_eq!(remote.transport().sent.len(), 2);
}

#[test]
fn test_button_held_at_start_does_not_advance() {
    let (mut remote, button) = remote();
    button.set(true);
    remote.start().unwrap();

    assert!(remote.poll(0).is_none());
    assert!(remote.poll(10).is_none());
    assert_eq!(remote.current_effect(), 0);
    assert_eq!(remote.transport().sent.len(), 1);

    // Erst Loslassen und erneutes Drücken schaltet weiter
    button.set(false);
    assert!(remote.poll(50).is_none());
    button.set(true);
    assert!(remote.poll(100).is_some());
    assert_eq!(remote.current_effect(), 1);
}

#[test]
fn test_bounce_is_filtered() {
    let (mut remote, button) = remote();
    remote.start().unwrap();

    button.set(true);
    assert!(remote.poll(100).is_some());
    // Kontakt prellt innerhalb des Entprell-Intervalls
    button.set(false);
    assert!(remote.poll(105).is_none());
    button.set(true);
    assert!(remote.poll(110).is_none());

    assert_eq!(remote.current_effect(), 1);
}

#[test]
fn test_no_press_no_message() {
    let (mut remote, _) = remote();
    remote.start().unwrap();

    for t in (0..500).step_by(10) {
        assert!(remote.poll(t).is_none());
    }

    assert_eq!(remote.transport().sent.len(), 1);
}

#[test]
fn test_retreat_wraps_to_last() {
    let (mut remote, _) = remote();
    remote.start().unwrap();

    let dispatch = remote.retreat().unwrap();

    assert_eq!(dispatch.effect, 6);
    assert_eq!(dispatch.name, Some("Off"));
    assert_eq!(remote.transport().last_message(), CommandMessage::set_effect(6));
}

// ============================================================================
// Tests: Ungültige Indizes
// ============================================================================

#[test]
fn test_invalid_effect_is_not_transmitted() {
    let (mut remote, _) = remote();
    remote.start().unwrap();

    let result = remote.set_effect(7);

    assert_eq!(
        result,
        Err(RemoteError::InvalidEffect { index: 7, count: 7 })
    );
    assert_eq!(remote.current_effect(), 0);
    assert_eq!(remote.transport().sent.len(), 1);
    assert_eq!(remote.display().show_count, 1);
}

#[test]
fn test_far_out_of_range_effect() {
    let (mut remote, _) = remote();

    assert!(remote.set_effect(usize::MAX).is_err());
    assert!(remote.transport().sent.is_empty());
}

// ============================================================================
// Tests: Fehler beim Senden / Anzeigen
// ============================================================================

#[test]
fn test_transport_failure_is_not_fatal() {
    let (mut remote, button) = remote();
    remote.start().unwrap();
    let mut now = 100;

    remote.transport_mut().fail_next_send = true;
    button.set(true);
    let result = remote.poll(now).unwrap();
    button.set(false);
    now += 50;
    remote.poll(now);
    now += 50;

    assert_eq!(
        result,
        Err(RemoteError::Transport(TransportError::QueueFull))
    );
    // Zustand läuft trotzdem weiter, Anzeige bleibt beim letzten Erfolg
    assert_eq!(remote.current_effect(), 1);
    assert_eq!(remote.display().shown.as_ref().unwrap().0, 0);

    press(&mut remote, &button, &mut now);
    assert_eq!(remote.current_effect(), 2);
    assert_eq!(remote.transport().last_message().argument, 2);
    assert_eq!(remote.display().shown.as_ref().unwrap().0, 2);
}

#[test]
fn test_display_failure_after_send() {
    let (mut remote, _) = remote();
    remote.display_mut().fail_next_show = true;

    let dispatch = remote.start().unwrap();

    // Nachricht ist trotzdem raus, Übergang gilt als erfolgt
    assert_eq!(dispatch.display, Err(DisplayError::WriteFailed));
    assert_eq!(dispatch.effect, 0);
    assert_eq!(dispatch.name, Some("Solid White"));
    assert_eq!(remote.transport().sent.len(), 1);

    let dispatch = remote.advance().unwrap();
    assert_eq!(dispatch.display, Ok(()));
    assert_eq!(remote.display().shown.as_ref().unwrap().0, 1);
}

// ============================================================================
// Tests: Funk-Link
// ============================================================================

type GatedRemote<'a> = Remote<MockButton, LinkGate<'a, MockTransport>, MockDisplay>;

fn gated_remote(status: &LinkStatus) -> (GatedRemote<'_>, MockButton) {
    let button = MockButton::default();
    let remote = Remote::new(
        EffectCatalog::default(),
        PeerAddress::BROADCAST,
        button.clone(),
        LinkGate::new(MockTransport::default(), status),
        MockDisplay::default(),
        DEBOUNCE_MS,
    );
    (remote, button)
}

#[test]
fn test_link_starting_passes_messages() {
    let status = LinkStatus::new();
    let (mut remote, _) = gated_remote(&status);

    remote.start().unwrap();

    assert_eq!(status.get(), LinkState::Starting);
    assert_eq!(remote.transport().inner().sent.len(), 1);
}

#[test]
fn test_link_offline_rejects_send() {
    let status = LinkStatus::new();
    let (mut remote, button) = gated_remote(&status);
    remote.start().unwrap();
    status.set(LinkState::Offline);

    button.set(true);
    let result = remote.poll(100).unwrap();

    assert_eq!(
        result,
        Err(RemoteError::Transport(TransportError::SendFailed))
    );
    assert_eq!(remote.transport().inner().sent.len(), 1);
    // Auswahl läuft trotzdem weiter
    assert_eq!(remote.current_effect(), 1);
}

#[test]
fn test_link_online_after_offline_sends_again() {
    let status = LinkStatus::new();
    let (mut remote, _) = gated_remote(&status);
    status.set(LinkState::Offline);
    assert!(remote.start().is_err());

    status.set(LinkState::Online);
    let dispatch = remote.advance().unwrap();

    assert_eq!(dispatch.effect, 1);
    assert_eq!(remote.transport().inner().sent.len(), 1);
    assert_eq!(
        remote.transport().inner().last_message(),
        CommandMessage::set_effect(1)
    );
}

#[test]
fn test_runs_without_display() {
    let remote_button = MockButton::default();
    let mut remote = Remote::new(
        EffectCatalog::default(),
        PeerAddress::BROADCAST,
        remote_button,
        MockTransport::default(),
        None::<MockDisplay>,
        DEBOUNCE_MS,
    );

    remote.start().unwrap();
    remote.advance().unwrap();

    assert_eq!(remote.current_effect(), 1);
    assert_eq!(remote.transport().sent.len(), 2);
}

// ============================================================================
// Tests: Helligkeit
// ============================================================================

#[test]
fn test_set_brightness_full_scale() {
    let (mut remote, _) = remote();
    remote.start().unwrap();

    let dispatch = remote.set_brightness(255).unwrap();

    assert_eq!(dispatch.message.command, Command::SetBrightness);
    assert_eq!(dispatch.effect, 0);
    let (_, frame) = remote.transport().sent.last().unwrap();
    assert_eq!(frame[1], Command::SetBrightness.opcode());
    assert_eq!(&frame[2..], &[0xFF, 0x00, 0x00, 0x00]);
}

// ============================================================================
// Tests: Peer-Adresse
// ============================================================================

#[test]
fn test_broadcast_peer() {
    let (mut remote, _) = remote();
    remote.start().unwrap();

    let (peer, _) = remote.transport().sent[0];
    assert!(peer.is_broadcast());
}

#[test]
fn test_unicast_peer() {
    let target = PeerAddress::parse("24:6F:28:AA:BB:CC").unwrap();
    let (mut remote, _) = remote_with_peer(target);

    remote.start().unwrap();
    remote.advance().unwrap();

    assert!(remote.transport().sent.iter().all(|(peer, _)| *peer == target));
}

// ============================================================================
// Tests: Protokoll
// ============================================================================

#[test]
fn test_set_effect_round_trip_for_whole_catalog() {
    let catalog = EffectCatalog::default();
    for index in 0..catalog.len() {
        let frame = encode_set_effect(index as u32);
        let msg = CommandMessage::decode(&frame).unwrap();
        assert_eq!(msg.command, Command::SetEffect);
        assert_eq!(msg.argument as usize, index);
    }
}

#[test]
fn test_every_message_has_declared_size() {
    let frames = [
        encode_set_effect(0),
        encode_set_effect(6),
        encode_set_brightness(0),
        encode_set_brightness(255),
        CommandMessage::next_effect().encode(),
        CommandMessage::prev_effect().encode(),
    ];
    for frame in frames {
        assert_eq!(frame.len(), MESSAGE_LEN);
        assert_eq!(frame[0] as usize, MESSAGE_LEN);
    }
}

#[test]
fn test_brightness_upper_bytes_zero() {
    let frame = encode_set_brightness(255);
    assert_eq!(frame, [6, 3, 255, 0, 0, 0]);
}

// ============================================================================
// Tests: Status-LED
// ============================================================================

#[test]
fn test_status_led_colors() {
    let mut led = MockLedWriter::default();

    led.write(status_color(SendStatus::Success, 10)).unwrap();
    led.write(status_color(SendStatus::Fail, 10)).unwrap();

    assert_eq!(
        led.colors,
        vec![RGB8 { r: 0, g: 10, b: 0 }, RGB8 { r: 10, g: 0, b: 0 }]
    );
}

#[test]
fn test_mock_led_writer_fail() {
    let mut led = MockLedWriter {
        fail_next_write: true,
        ..Default::default()
    };

    assert_eq!(
        led.write(status_color(SendStatus::Fail, 10)),
        Err(LedError::WriteFailed)
    );
    assert!(led.colors.is_empty());
}
