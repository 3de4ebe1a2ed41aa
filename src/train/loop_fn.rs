use std::time::Instant;

use log::{debug, info};

use crate::data::dataset::Sample;
use crate::network::{Network, NetworkError};
use crate::train::epoch_stats::EpochStats;

/// One pass over `samples` in order: `forward` then `backward` per sample.
///
/// Returns the mean loss over the epoch, or 0.0 for an empty slice.
pub fn train_epoch(network: &mut Network, samples: &[Sample]) -> Result<f64, NetworkError> {
    let mut total_loss = 0.0;

    for sample in samples {
        network.forward(&sample.input)?;
        total_loss += network.backward(&sample.expected)?;
    }

    if samples.is_empty() {
        return Ok(0.0);
    }
    Ok(total_loss / samples.len() as f64)
}

/// Trains `network` for `epochs` epochs of online gradient descent and
/// returns the mean training loss of the last completed epoch.
///
/// Samples are visited in their given order every epoch; there is no
/// shuffling and no batching. `on_epoch` receives the statistics of each
/// finished epoch.
pub fn train_loop<F>(
    network: &mut Network,
    samples: &[Sample],
    epochs: usize,
    mut on_epoch: F,
) -> Result<f64, NetworkError>
where
    F: FnMut(&EpochStats),
{
    debug!("training on {} samples for {} epochs", samples.len(), epochs);

    let mut last_train_loss = 0.0;

    for epoch in 1..=epochs {
        let t_start = Instant::now();

        let train_loss = train_epoch(network, samples)?;
        last_train_loss = train_loss;

        let stats = EpochStats {
            epoch,
            total_epochs: epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        info!("#{}/{} loss = {:.6} ({} ms)", epoch, epochs, train_loss, stats.elapsed_ms);
        on_epoch(&stats);
    }

    Ok(last_train_loss)
}
