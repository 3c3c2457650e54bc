/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static VERSION_HELP: &str = "Implementation preset to use

0: scalar greyscale, reference power function
1: scalar greyscale, Taylor series power
2: vectorized greyscale, reference power function
3: scalar greyscale, integer power with Taylor series fraction

--pow overrides the power strategy of the chosen preset";

pub static POW_HELP: &str = "Override the power strategy

The Taylor based strategies expand x^gamma around 1 and lose
accuracy on very dark pixels. naive-taylor sums the series in
single precision and exists to cross check the others.";

pub static COEFFICIENTS_HELP: &str = "Red, green and blue weights

Three comma separated non-negative numbers, not all zero.
They are normalized by their sum, so 1,1,1 and 2,2,2 are the same.
The default are the Rec. 709 luma weights.";

pub static BENCHMARK_HELP: &str = "Repeat the conversion and report timings

The input is decoded once, then greyscale reduction and gamma
correction run the given number of times (100 when no number is
given). Total and mean wall time are printed, and the last result
is written to the output file.";

pub static LEGACY_COMMENTS_HELP: &str = "Allow comments inside header numbers

Netpbm only allows comments between header tokens. With this flag
a '#' in the middle of a number skips to the end of the line and
the number continues on the next one.";
