use rust_bert::pipelines::common::ModelType;
use rust_bert::pipelines::sentiment::{SentimentModel, SentimentPolarity};
use rust_bert::pipelines::sequence_classification::{
    SequenceClassificationConfig, SequenceClassificationModel,
};
use rust_bert::resources::{LocalResource, Resource};
use tch::Device;

use std::path::PathBuf;

use log::*;

use crate::Error;

/// Raw classifier output: a label code and a confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub label: String,
    pub score: f64,
}

/// Anything that can put a sentiment label on a piece of text.
pub trait Classifier {
    fn classify(&self, text: &str) -> Result<Scored, Error>;
}

/// A three class sequence classifier read from `./<name>.model/`.
///
/// The model's `config.json` provides the `LABEL_n` codes.
pub struct Senti {
    model: SequenceClassificationModel,
}

impl Senti {
    pub fn new(model_name: &str) -> Result<Self, Error> {
        let local = |file: &str| {
            Resource::Local(LocalResource {
                local_path: PathBuf::from(format!("./{}.model/{}", model_name, file)),
            })
        };
        let config = SequenceClassificationConfig {
            model_type: ModelType::Roberta,
            model_resource: local("model.ot"),
            config_resource: local("config.json"),
            vocab_resource: local("vocab.json"),
            merges_resource: Some(local("merges.txt")),
            lower_case: false,
            device: Device::cuda_if_available(),
            ..Default::default()
        };
        debug!("Loading sequence classifier {}", model_name);
        let model = SequenceClassificationModel::new(config)
            .map_err(|e| Error::ModelUnavailable(e.to_string()))?;

        Ok(Self { model })
    }
}

impl Classifier for Senti {
    fn classify(&self, text: &str) -> Result<Scored, Error> {
        trace!("  Senti received: {}", text);
        let label = self.model.predict(&[text]).pop().ok_or(Error::UnableToScore)?;
        Ok(Scored {
            label: label.text,
            score: label.score,
        })
    }
}

/// The stock rust-bert sentiment model.
///
/// It only knows two polarities so it never reports `LABEL_1`.
pub struct DefaultSenti {
    model: SentimentModel,
}

impl DefaultSenti {
    pub fn new() -> Result<Self, Error> {
        debug!("Loading default sentiment model");
        let model = SentimentModel::new(Default::default())
            .map_err(|e| Error::ModelUnavailable(e.to_string()))?;

        Ok(Self { model })
    }
}

impl Classifier for DefaultSenti {
    fn classify(&self, text: &str) -> Result<Scored, Error> {
        trace!("  DefaultSenti received: {}", text);
        let sentiment = self.model.predict(&[text]).pop().ok_or(Error::UnableToScore)?;
        Ok(Scored {
            label: polarity_label(&sentiment.polarity).to_string(),
            score: sentiment.score,
        })
    }
}

fn polarity_label(polarity: &SentimentPolarity) -> &'static str {
    match polarity {
        SentimentPolarity::Positive => "LABEL_2",
        SentimentPolarity::Negative => "LABEL_0",
    }
}

/// Picks the classifier named by the config.
pub fn load(model_name: &str) -> Result<Box<dyn Classifier>, Error> {
    if model_name == "default" {
        Ok(Box::new(DefaultSenti::new()?))
    } else {
        Ok(Box::new(Senti::new(model_name)?))
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn classify(&self, text: &str) -> Result<Scored, Error> {
        (**self).classify(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;

    #[test]
    fn polarity_maps_to_outer_labels() {
        assert_eq!(
            Mood::from_label(polarity_label(&SentimentPolarity::Positive)),
            Mood::Positive
        );
        assert_eq!(
            Mood::from_label(polarity_label(&SentimentPolarity::Negative)),
            Mood::Negative
        );
    }
}
