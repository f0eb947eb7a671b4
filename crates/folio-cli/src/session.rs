use crate::prompt::Prompter;
use anyhow::Context;
use folio_core::backup;
use folio_core::experience::{ExperienceDoc, NewExperience};
use folio_core::inventory;
use folio_core::profile::{Profile, ProfileUpdate};
use folio_core::project::{NewProject, ProjectsDoc};
use folio_core::skills::SkillsDoc;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HEADER: &str = "\
=====================================
   Portfolio Content Manager
=====================================";

const MENU: &str = "\
Choose an option:
1. Update Profile Information
2. Add New Project
3. Add Work Experience
4. Update Skills
5. View Current Data
6. Backup Data
7. Exit";

/// One interactive editing session over a content directory.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    content_dir: PathBuf,
    backup_root: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, content_dir: PathBuf, backup_root: PathBuf) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            content_dir,
            backup_root,
        }
    }

    /// Run the menu loop until the user exits or input ends. Errors inside an
    /// operation are reported and the loop continues; only channel I/O errors
    /// propagate out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.prompter.say(HEADER)?;
        loop {
            self.prompter.say("")?;
            self.prompter.say(MENU)?;
            let Some(choice) = self.prompter.line("Enter choice: ")? else {
                break;
            };

            let result = match choice.trim() {
                "1" => self.update_profile(),
                "2" => self.add_project(),
                "3" => self.add_experience(),
                "4" => self.update_skills(),
                "5" => self.view_data(),
                "6" => self.backup_data(),
                "7" => {
                    self.prompter.say("\nGoodbye!")?;
                    break;
                }
                _ => {
                    self.prompter.say("invalid choice")?;
                    Ok(())
                }
            };

            if let Err(e) = result {
                // Full cause chain, same shape the top-level handler prints
                self.prompter.say(&format!("error: {e:#}"))?;
            }

            // View-data output is meant to be read in place; everything else
            // gets an acknowledgement pause before the menu redraws.
            if choice.trim() != "5" {
                self.prompter.ask("\nPress Enter to continue...")?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    fn update_profile(&mut self) -> anyhow::Result<()> {
        let mut profile =
            Profile::load(&self.content_dir).context("failed to load profile document")?;

        self.prompter.say("\nUpdate Profile Information")?;
        self.prompter.say("Press Enter to keep current value\n")?;

        let p = &profile.personal;
        let update = ProfileUpdate {
            name: diff(&p.name, self.prompter.ask_default("Name", &p.name)?),
            title: diff(&p.title, self.prompter.ask_default("Title", &p.title)?),
            email: diff(&p.email, self.prompter.ask_default("Email", &p.email)?),
            location: diff(&p.location, self.prompter.ask_default("Location", &p.location)?),
        };
        profile.apply(update);
        profile
            .save(&self.content_dir)
            .context("failed to write profile document")?;

        self.prompter.say("\nProfile updated successfully")?;
        Ok(())
    }

    fn add_project(&mut self) -> anyhow::Result<()> {
        let mut doc =
            ProjectsDoc::load(&self.content_dir).context("failed to load projects document")?;

        self.prompter.say("\nAdd New Project")?;
        let new = NewProject {
            title: self.prompter.ask("Project Title: ")?,
            category: self.prompter.ask("Category (Full Stack/Frontend/Backend): ")?,
            description: self.prompter.ask("Short Description: ")?,
            long_description: self.prompter.ask("Long Description: ")?,
            image: self.prompter.ask("Image Path (/images/...): ")?,
            technologies: self.prompter.ask("Technologies (comma-separated): ")?,
            live_url: self.prompter.ask("Live URL (optional): ")?,
            github_url: self.prompter.ask("GitHub URL (optional): ")?,
            featured: self.prompter.ask("Featured project? (y/n): ")?,
        };

        let id = doc.add(new).id;
        doc.save(&self.content_dir)
            .context("failed to write projects document")?;

        self.prompter
            .say(&format!("\nProject #{id} added successfully"))?;
        Ok(())
    }

    fn add_experience(&mut self) -> anyhow::Result<()> {
        let mut doc =
            ExperienceDoc::load(&self.content_dir).context("failed to load experience document")?;

        self.prompter.say("\nAdd Work Experience")?;
        let company = self.prompter.ask("Company Name: ")?;
        let position = self.prompter.ask("Position: ")?;
        let duration = self.prompter.ask("Duration (e.g., 2020 - 2022): ")?;
        let location = self.prompter.ask("Location: ")?;
        let description = self.prompter.ask("Description: ")?;
        let technologies = self.prompter.ask("Technologies (comma-separated): ")?;

        self.prompter.say("Add responsibilities (empty line to finish):")?;
        let responsibilities = self.prompter.ask_lines("- ")?;

        doc.add(NewExperience {
            company,
            position,
            duration,
            location,
            description,
            responsibilities,
            technologies,
        });
        doc.save(&self.content_dir)
            .context("failed to write experience document")?;

        self.prompter.say("\nExperience added successfully")?;
        Ok(())
    }

    fn update_skills(&mut self) -> anyhow::Result<()> {
        let mut doc =
            SkillsDoc::load(&self.content_dir).context("failed to load skills document")?;

        self.prompter.say("\nUpdate Skills")?;
        self.prompter.say("Select category:")?;
        for (i, category) in doc.categories.iter().enumerate() {
            self.prompter.say(&format!("{}. {}", i + 1, category.title))?;
        }

        let choice = self.prompter.ask("Choice: ")?;
        let index: usize = choice
            .trim()
            .parse()
            .with_context(|| format!("category choice '{choice}' is not a number"))?;

        // Validate before asking for the rest; an out-of-range index aborts
        // the operation without touching the document.
        let count = doc.categories.len();
        if index == 0 || index > count {
            anyhow::bail!("skill category {index} is out of range (1-{count})");
        }

        let name = self.prompter.ask("Skill Name: ")?;
        let level_input = self.prompter.ask("Skill Level (0-100): ")?;
        let level: u32 = level_input
            .trim()
            .parse()
            .with_context(|| format!("skill level '{level_input}' is not a number"))?;

        doc.add_skill(index, name, level)?;
        doc.save(&self.content_dir)
            .context("failed to write skills document")?;

        self.prompter.say("\nSkill added successfully")?;
        Ok(())
    }

    fn view_data(&mut self) -> anyhow::Result<()> {
        let docs = inventory::list_documents(&self.content_dir)
            .context("failed to list content documents")?;

        self.prompter.say("\nCurrent Data Files:")?;
        for doc in docs {
            self.prompter
                .say(&format!("  - {} ({:.2} KB)", doc.name, doc.size_kib()))?;
        }
        Ok(())
    }

    fn backup_data(&mut self) -> anyhow::Result<()> {
        let snapshot = backup::create_snapshot(&self.content_dir, &self.backup_root)
            .context("failed to create backup")?;
        self.prompter
            .say(&format!("\nBackup created at: {}", snapshot.display()))?;
        Ok(())
    }
}

/// `None` when the answer matches the current value, so an untouched prompt
/// leaves the field untouched.
fn diff(current: &str, answer: String) -> Option<String> {
    if answer == current {
        None
    } else {
        Some(answer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
