use anyhow::{Context, Error};

use sample_test_format::{
    select_fetcher, AtCoder, CredentialStore, HeadingSiblingParser, ProblemId, SampleError,
    SampleSet,
};

use crate::opt::{FetchOpt, SiteOpt};

/// Download the samples of a problem from the website configured by `site`, logging in when
/// possible.
pub fn download_samples(id: &ProblemId, site: &SiteOpt) -> Result<SampleSet, Error> {
    let atcoder = AtCoder::new(&site.base_url);
    let credentials = if site.no_login {
        None
    } else {
        CredentialStore::user_store().resolve()
    };
    let fetcher = select_fetcher(!site.no_login, credentials, &atcoder.login_url())?;
    let samples = atcoder.extract_samples(id, fetcher.as_ref(), &HeadingSiblingParser::default())?;
    check_identifier(id, &samples)?;
    Ok(samples)
}

/// Make sure the samples belong to the requested problem.
pub fn check_identifier(requested: &ProblemId, samples: &SampleSet) -> Result<(), SampleError> {
    if &samples.id != requested {
        return Err(SampleError::IdentifierMismatch {
            requested: requested.to_string(),
            fetched: samples.id.to_string(),
        });
    }
    Ok(())
}

pub fn main_fetch(opt: FetchOpt) -> Result<(), Error> {
    let samples = download_samples(&opt.problem_id, &opt.site)?;
    std::fs::create_dir_all(&opt.output_dir)
        .with_context(|| format!("Failed to create {}", opt.output_dir.display()))?;
    let written = samples.dump(&opt.output_dir)?;
    for path in &written {
        info!("Written {}", path.display());
    }
    if opt.json {
        println!("{}", samples.to_json()?);
    } else {
        println!(
            "Saved {} samples of {} in {}",
            samples.sample_io_pairs.len(),
            samples.id,
            opt.output_dir.display()
        );
    }
    Ok(())
}
