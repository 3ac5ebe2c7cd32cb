//! Radio Demo Front-End Main Application
//!
//! Composition root: brings up the board, wires the feedback
//! collaborators together and hands over to the dispatch loop.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Flex, Input, Level, Output, Pull, Speed};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use rf_demo_firmware::prelude::*;
use rf_demo_firmware::supervisor::HeartbeatSupervisor;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Radio demo front end v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    let mut delay = Delay;
    delay.delay_ms(STARTUP_DELAY_MS);

    let clock = SystemClock::new();

    // Switch lines stay unconfigured until the first path selection
    let antenna = AntennaSwitch::new(Flex::new(p.PC8), Flex::new(p.PC6));

    let signaling = Signaling::new(
        clock,
        Output::new(p.PB5, Level::Low, Speed::Low),
        Output::new(p.PC1, Level::Low, Speed::Low),
        Output::new(p.PC0, Level::Low, Speed::Low),
    );

    info!(
        "Indicators on {}/{}/{}, antenna switch on {}/{}",
        pins::LED_SCAN,
        pins::LED_TX,
        pins::LED_RX,
        pins::ANT_SW_CTRL,
        pins::ANT_SW_CTRL_N
    );

    let services = Services::new(clock, signaling, antenna);

    // Read exactly once; the mode is fixed until the next reset
    let mut mode_select = Input::new(p.PC13, Pull::None);
    let dispatcher = Dispatcher::start(&mut mode_select, services, HeartbeatSupervisor::new());

    // Blocking from here on; nothing else is spawned on this executor
    dispatcher.run()
}
