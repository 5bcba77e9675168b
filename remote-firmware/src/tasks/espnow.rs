// ESP-NOW Task - Bringt den Funk hoch und sendet Nachrichten aus der Queue
use defmt::{Debug2Format, error, info, warn};
use esp_radio::esp_now::{
    EspNow, EspNowManager, EspNowSender, EspNowWifiInterface, PeerInfo,
};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController};

use crate::config::ESPNOW_CHANNEL;
use crate::{FrameReceiver, LinkState, PeerAddress, RADIO_LINK, SendStatus, SendStatusSignal};

/// Funk-Hardware wie von `esp_radio::wifi::new` geliefert
pub struct Radio {
    pub controller: WifiController<'static>,
    pub esp_now: EspNow<'static>,
}

/// Betriebsbereiter ESP-NOW Link
///
/// Der Manager muss am Leben bleiben, solange gesendet wird.
struct EspNowLink {
    _manager: EspNowManager<'static>,
    sender: EspNowSender<'static>,
}

/// Bringt WiFi im Station-Modus hoch und registriert den Empfänger
///
/// Verbindet sich mit keinem Access Point; ESP-NOW braucht nur das
/// gestartete Interface.
async fn bring_up(radio: Radio, peer: PeerAddress) -> Option<(WifiController<'static>, EspNowLink)> {
    let Radio {
        mut controller,
        esp_now,
    } = radio;

    let client_config = ModeConfig::Client(ClientConfig::default());
    if let Err(e) = controller.set_config(&client_config) {
        error!("ESP-NOW: Failed to configure station mode: {}", Debug2Format(&e));
        return None;
    }

    if let Err(e) = controller.start_async().await {
        error!("ESP-NOW: Failed to start WiFi: {}", Debug2Format(&e));
        return None;
    }

    match esp_now.version() {
        Ok(version) => info!("ESP-NOW: Version {}", version),
        Err(e) => warn!("ESP-NOW: Version unknown: {}", Debug2Format(&e)),
    }

    let peer_info = PeerInfo {
        interface: EspNowWifiInterface::Sta,
        peer_address: *peer.octets(),
        lmk: None,
        channel: ESPNOW_CHANNEL,
        encrypt: false,
    };
    if let Err(e) = esp_now.add_peer(peer_info) {
        error!("ESP-NOW: Failed to add peer {}: {}", peer, Debug2Format(&e));
        return None;
    }
    info!("ESP-NOW: Peer {} registered", peer);

    let (manager, sender, _receiver) = esp_now.split();
    Some((
        controller,
        EspNowLink {
            _manager: manager,
            sender,
        },
    ))
}

/// ESP-NOW Task
///
/// - Initialisiert WiFi + ESP-NOW (Fehler → degradierter Modus)
/// - Sendet jede Nachricht aus der Queue an ihr Ziel
/// - Meldet das asynchrone Sende-Ergebnis (Log + Status-LED)
///
/// Ohne Funk wird `RADIO_LINK` auf `Offline` gesetzt; der Remote-Task
/// lehnt dann selbst ab. Was vorher schon in der Queue lag, wird geleert
/// und als `Fail` gemeldet.
#[embassy_executor::task]
pub async fn espnow_task(
    radio: Option<Radio>,
    peer: PeerAddress,
    frames: FrameReceiver,
    status: &'static SendStatusSignal,
) {
    info!("ESP-NOW: Starting task");

    let link = match radio {
        Some(radio) => bring_up(radio, peer).await,
        None => None,
    };
    // Controller behalten: Drop würde WiFi wieder stoppen
    let (_controller, mut link) = match link {
        Some((controller, link)) => {
            RADIO_LINK.set(LinkState::Online);
            (Some(controller), Some(link))
        }
        None => {
            RADIO_LINK.set(LinkState::Offline);
            warn!("ESP-NOW: Running without radio, messages will be dropped");
            (None, None)
        }
    };

    loop {
        let outgoing = frames.receive().await;

        let result = match link.as_mut() {
            Some(link) => link
                .sender
                .send_async(outgoing.peer.octets(), &outgoing.frame)
                .await
                .map_err(|e| warn!("ESP-NOW: Send to {} failed: {}", outgoing.peer, Debug2Format(&e))),
            None => Err(()),
        };

        let send_status = match result {
            Ok(()) => SendStatus::Success,
            Err(()) => SendStatus::Fail,
        };
        info!("ESP-NOW: Message send status: {}", send_status.as_str());
        status.signal(send_status);
    }
}
