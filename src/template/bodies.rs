//! Static bodies of the three generated project files.

/// File name of the build descriptor written into the git directory.
pub const PAVEMENT_FILE_NAME: &str = "pavement.py";

/// File name of the batch-submission template written into the git directory.
pub const SBATCH_TEMPLATE_FILE_NAME: &str = "sbatch_template";

/// File name of the analysis configuration written into the git directory.
pub const PROJ_CONF_FILE_NAME: &str = "proj_conf.yaml";

/// Build descriptor consumed by paver.
///
/// Partition, wall-clock time, mail type, core count and constraint come from
/// the batch defaults in the config, not from prompts.
pub const PAVEMENT_PY: &str = r#""""
${project} pavement file

Created by project-init on ${now}.
"""
# This is a pavement configuration file generated by project-init.
# Some configurations have been commented out, but are included to show
# additional configurations and imports
import os
import itertools
import sys
import logbook
import glob
log = logbook.Logger("paver")

from mako.template import Template
from paver.easy import *
from bcbio.paver.misc import *
from bcbio.paver.project import *
import paver.doctools

handler = logbook.FileHandler(os.path.join("${log_dir}", "%s.log" % log.name))
handler.push_application()

options(
    log = log,
    dirs = Bunch(
        top = "${top_dir}",
        sbatch = "${sbatch_dir}",
        log = "${log_dir}",
        git = "${git_dir}",
        intermediate = "${intermediate_dir}",
        data = os.path.join("${top_dir}", "data"),
        ),
    sbatch = Bunch(
        project_id = "${uppmax_project_id}",
        constraint = '${constraint}',
        time = '${time}',
        jobname = '',
        workdir = "${intermediate_dir}",
        partition = '${partition}',
        cores = '${cores}',
        mail_type = '${mail_type}',
        mail_user = "${mail_user}",
        header = '',
        footer = '',
        command_str = '',
        ),
    mako = Bunch(
        sbatch = Template(filename = os.path.join("${git_dir}", "${sbatch_template}")),
        ),
    sphinx = Bunch(
        docroot = "${sphinx_dir}",
        ),
    # useful option for facilitating rsync
    #rsync = Bunch(
    #    host = "",
    #    user = "",
    #    src = "",
    #    dest = "",
    #    ),
    )
# Find flowcell ids
options(
    illumina = Bunch(
        flowcell_ids = os.listdir(options.dirs.data),
        ),
    )
# ##############################
# # Sbatch tasks
# # Note: these tasks do not actually run sbatch, they
# # just generate the sbatch files
# ##############################


# ##############################
# # Sphinx related tasks
# ##############################

"#;

/// Batch-submission skeleton, written to disk unrendered.
///
/// The constraint line disappears (leaving a blank line) when no constraint
/// is set for a job.
pub const SBATCH_TEMPLATE: &str = r#"#!/bin/bash -l
TMPDIR=/scratch/$SLURM_JOB_ID

#SBATCH -A ${project_id}
#SBATCH -t ${time}
#SBATCH -o ${jobname}.stdout
#SBATCH -e ${jobname}.stderr
#SBATCH -J ${jobname}
#SBATCH -D ${workdir}
#SBATCH -p ${partition}
#SBATCH -n ${cores}
#SBATCH --mail-type=${mail_type}
#SBATCH --mail-user=${mail_user}
${constraint?#SBATCH -C }
module load biopython
module load bioinfo-tools
module unload R
module load R/2.13.0
${header}
${command_str}
${footer}
"#;

/// Default analysis pipeline configuration.
pub const PROJ_CONF_YAML: &str = r#"galaxy_config:
third_party:
  top_dir: ${top_dir}
  log_dir: ${log_dir}
  intermediate_dir: ${intermediate_dir}
  genome_build: ${genome_build}
program:
  bowtie: bowtie
  samtools: samtools
  bwa: bwa
  ucsc_bigwig: wigToBigWig
  picard: /bubo/sw/apps/bioinfo/picard/1.41
  gatk: /bubo/sw/apps/bioinfo/GATK/1.0.5909
  snpEff:
  fastqc: fastqc
  pdflatex: pdflatex
  barcode: barcode_sort_trim.py
algorithm:
  aligner: bwa
  max_errors: 2
  num_cores: 8
  platform: illumina
  recalibrate: true
  snpcall: true
  dbsnp:
  bc_mismatch: 2
  bc_read: 1
  bc_position: 3
  java_memory: 3g
  save_diskspace: true

analysis:
  towig_script: bam_to_wiggle.py
distributed:
  rabbitmq_vhost: bionextgen
# configuration algorithm changes for custom post-processing steps
custom_algorithms:
  'SNP calling':
    aligner: bwa
    recalibrate: true
    snpcall: true
    dbsnp:
  'Minimal':
    aligner: ""
"#;
