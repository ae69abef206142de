use anyhow::{bail, Error};
use termcolor::WriteColor;

use sample_test_format::ui::{color_choice, Reporter};
use sample_test_format::{check, ProblemId, SampleError, SampleSet, Verdict};
use sample_test_lang::{Program, SourceFile};

use crate::fetch::download_samples;
use crate::opt::RunOpt;

/// The problem to test against: the one on the command line, or the one deduced from the name of
/// the source file.
pub fn resolve_problem_id(opt: &RunOpt) -> Result<ProblemId, SampleError> {
    match &opt.problem_id {
        Some(id) => Ok(id.clone()),
        None => ProblemId::deduce(&opt.source)
            .ok_or_else(|| SampleError::IdentifierNotDeducible(opt.source.clone())),
    }
}

/// Run the program on each sample, reporting the outcome of each one. Returns the verdicts in
/// the order of the samples.
pub fn test_samples<W: WriteColor>(
    program: &Program,
    samples: &SampleSet,
    reporter: &mut Reporter<W>,
) -> Result<Vec<Verdict>, Error> {
    let mut verdicts = Vec::with_capacity(samples.sample_io_pairs.len());
    for (index, case) in samples.sample_io_pairs.iter().enumerate() {
        debug!("Running sample {} of {}", index, samples.id);
        let result = program.run(&case.input_text())?;
        let verdict = check(&case.output_text(), &result);
        reporter.case(index, case, &result, &verdict);
        verdicts.push(verdict);
    }
    reporter.summary();
    Ok(verdicts)
}

pub fn main_run(opt: RunOpt) -> Result<(), Error> {
    if !opt.source.is_file() {
        bail!("Source file not found: {}", opt.source.display());
    }
    let source = SourceFile::new(&opt.source)?;
    info!("Detected language {} for {}", source.language().name, opt.source.display());
    let id = resolve_problem_id(&opt)?;

    let filename = opt
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut reporter = Reporter::stdout(color_choice(opt.no_color));
    reporter.header(&id, &filename);

    let samples = download_samples(&id, &opt.site)?;
    let program = source.prepare()?;
    let verdicts = test_samples(&program, &samples, &mut reporter)?;
    info!(
        "{} of {} samples passed",
        verdicts.iter().filter(|v| v.is_ok()).count(),
        verdicts.len()
    );
    Ok(())
}
