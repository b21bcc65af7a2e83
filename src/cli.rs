//! Interactive terminal questionnaire.
//!
//! Reads one answer per line. Enumerated questions accept either the option
//! number or its key; blank answers to required questions are asked again.

use std::io::{self, BufRead, Write};

use crate::input::{
    AiAssistance, Budget, Complexity, DataSensitivity, Goal, Performance, ProjectInput,
    ProjectType, TeamSkill, Traffic,
};

fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the questionnaire was complete",
        ));
    }
    Ok(line.trim().to_string())
}

fn choose<T, R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    options: &[T],
    key: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> io::Result<String> {
    writeln!(writer, "\n{question}")?;
    for (i, option) in options.iter().enumerate() {
        writeln!(writer, "  {}) {} [{}]", i + 1, label(option), key(option))?;
    }

    loop {
        write!(writer, "> ")?;
        writer.flush()?;
        let answer = read_answer(reader)?;

        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .or_else(|| options.iter().find(|option| key(option) == answer));

        match picked {
            Some(option) => return Ok(key(option).to_string()),
            None => writeln!(writer, "Please pick one of the listed options.")?,
        }
    }
}

fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    required: bool,
) -> io::Result<String> {
    loop {
        write!(writer, "\n{question}\n> ")?;
        writer.flush()?;
        let answer = read_answer(reader)?;
        if !required || !answer.is_empty() {
            return Ok(answer);
        }
        writeln!(writer, "This field is required.")?;
    }
}

/// Walk through the questionnaire and collect a complete submission.
pub fn prompt_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<ProjectInput> {
    let project_type = choose(reader, writer, "What are you building?", ProjectType::ALL, ProjectType::as_str, ProjectType::label)?;
    let complexity = choose(reader, writer, "How complex is it?", Complexity::ALL, Complexity::as_str, Complexity::label)?;
    let performance = choose(reader, writer, "How important is performance?", Performance::ALL, Performance::as_str, Performance::label)?;
    let timeline = ask(reader, writer, "What is your timeline? (e.g. 3 months)", true)?;
    let budget = choose(reader, writer, "What is your infrastructure budget?", Budget::ALL, Budget::as_str, Budget::label)?;
    let team_skill = choose(reader, writer, "Who is building it?", TeamSkill::ALL, TeamSkill::as_str, TeamSkill::label)?;
    let data_sensitivity = choose(reader, writer, "How sensitive is the data?", DataSensitivity::ALL, DataSensitivity::as_str, DataSensitivity::label)?;
    let traffic = choose(reader, writer, "How much traffic do you expect?", Traffic::ALL, Traffic::as_str, Traffic::label)?;
    let goal = choose(reader, writer, "What matters most?", Goal::ALL, Goal::as_str, Goal::label)?;
    let ai_assistance = choose(reader, writer, "How will you use AI while building?", AiAssistance::ALL, AiAssistance::as_str, AiAssistance::label)?;
    let description = ask(reader, writer, "Anything else about the project? (optional)", false)?;

    Ok(ProjectInput {
        project_type,
        complexity,
        performance,
        budget,
        team_skill,
        data_sensitivity,
        traffic,
        timeline,
        goal,
        ai_assistance,
        description: Some(description).filter(|d| !d.is_empty()),
    })
}
