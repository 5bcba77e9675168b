// Remote Task - Taster pollen, Effekt weiterschalten, Kommando senden
use defmt::{error, info, warn};
use embassy_time::{Duration, Instant, Timer};
use remote_core::{
    CommandTransport, Dispatch, EffectCatalog, LinkGate, PushButton, Remote, RemoteError,
    SelectionDisplay, TransportError,
};

use crate::config::{BUTTON_DEBOUNCE_MS, POLL_INTERVAL_MS};
use crate::hal::{ChannelTransport, GpioButton, OledDisplay};
use crate::{FrameSender, PeerAddress, RADIO_LINK};

/// Remote Logic - Testbare Hauptschleife ohne Hardware-Abhängigkeit
///
/// Sendet beim Start Effekt 0, danach pro Durchlauf:
/// - Taster entprellen
/// - bei Tastendruck nächsten Effekt setzen und senden
/// - 10 ms schlafen
///
/// Fehler werden nur geloggt, die Schleife läuft immer weiter.
pub async fn remote_logic<B, T, D>(mut remote: Remote<B, T, D>) -> !
where
    B: PushButton,
    T: CommandTransport,
    D: SelectionDisplay,
{
    info!(
        "Remote: {} effects, sending to {}",
        remote.catalog().len(),
        remote.peer()
    );
    for (index, name) in remote.catalog().iter() {
        info!("Remote:   [{}] {}", index, name);
    }

    let result = remote.start();
    report(&remote, result);

    loop {
        let now_ms = Instant::now().as_millis();
        if let Some(result) = remote.poll(now_ms) {
            report(&remote, result);
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Loggt das Ergebnis eines Übergangs
fn report<B, T, D>(remote: &Remote<B, T, D>, result: Result<Dispatch, RemoteError>)
where
    B: PushButton,
    T: CommandTransport,
    D: SelectionDisplay,
{
    match result {
        Ok(dispatch) => {
            info!("Remote: Message queued: {}", dispatch);
            if let Some(name) = dispatch.name {
                info!("Remote: Setting effect to: {}", name);
            }
            if let Err(e) = dispatch.display {
                warn!("Display: Update failed: {}", e);
            }
        }
        Err(RemoteError::Transport(TransportError::SendFailed)) => {
            error!(
                "Remote: Radio offline, '{}' not sent",
                remote.current_name().unwrap_or("?")
            );
        }
        Err(RemoteError::Transport(e)) => {
            // Index ist trotzdem weitergeschaltet, kein Retry
            error!(
                "Remote: Error sending message for '{}': {}",
                remote.current_name().unwrap_or("?"),
                e
            );
        }
        Err(RemoteError::InvalidEffect { index, count }) => {
            warn!("Remote: Effect {} out of range (0..{})", index, count);
        }
    }
}

/// Remote Task - Embassy Task für die Hauptschleife
///
/// Baut den besitzenden Kontext aus echter Hardware zusammen und ruft
/// dann `remote_logic()` auf.
///
/// # Parameter
/// - `button`: Taster (aktiv LOW)
/// - `display`: OLED, `None` wenn die Initialisierung fehlgeschlagen ist
/// - `frame_sender`: Queue zum ESP-NOW-Task
/// - `peer`: Empfänger-Adresse
#[embassy_executor::task]
pub async fn remote_task(
    button: GpioButton<'static>,
    display: Option<OledDisplay<'static>>,
    frame_sender: FrameSender,
    peer: PeerAddress,
) {
    let remote = Remote::new(
        EffectCatalog::default(),
        peer,
        button,
        LinkGate::new(ChannelTransport::new(frame_sender), &RADIO_LINK),
        display,
        BUTTON_DEBOUNCE_MS,
    );

    remote_logic(remote).await
}
