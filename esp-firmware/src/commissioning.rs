// Commissioning-Zustand des Geräts
//
// Integrationspunkt für den Matter-Stack: dessen Glue-Code muss
// `set_commissioned(true)` aufrufen, sobald ein Fabric existiert (nach
// erfolgreichem Pairing bzw. beim Boot mit gespeichertem Fabric), und
// `set_commissioned(false)`, wenn der letzte Fabric entfernt wird. In diesem
// Repository ruft nur der Factory-Reset über den BOOT-Button die Funktion auf;
// ohne Stack-Anbindung bleibt die Status-LED daher im Zustand
// "Uncommissioned". Gelesen wird das Flag von der Status-LED.

use core::sync::atomic::{AtomicBool, Ordering};

static COMMISSIONED: AtomicBool = AtomicBool::new(false);

/// Setzt den Commissioning-Zustand, gibt den vorherigen Wert zurück
pub fn set_commissioned(commissioned: bool) -> bool {
    COMMISSIONED.swap(commissioned, Ordering::AcqRel)
}

pub fn is_commissioned() -> bool {
    COMMISSIONED.load(Ordering::Acquire)
}
